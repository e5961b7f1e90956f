//! Autoplay - choose where to put a piece
//!
//! Enumerates every placement reachable from the piece's current position
//! (rotate in place, slide sideways, hard drop) and rates the resulting board
//! with a linear heuristic over lines cleared, aggregate height, holes and
//! bumpiness.

use crate::core::{
    check_collision, clear_lines, drop_distance, merge_tetromino, rotate_tetromino, Board,
    Tetromino,
};
use crate::types::GameAction;

/// Heuristic weights, scaled by 1000
const LINES_WEIGHT: i64 = 760;
const HEIGHT_WEIGHT: i64 = -510;
const HOLES_WEIGHT: i64 = -357;
const BUMPINESS_WEIGHT: i64 = -184;

/// Charged when part of the landed piece sticks out above the board
const OVERFLOW_PENALTY: i64 = -1_000_000;

/// One reachable final position of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Clockwise rotations applied at the start position
    pub rotations: u8,
    /// Horizontal offset applied after rotating
    pub shift: i8,
    /// Final `x` of the piece
    pub x: i8,
    pub lines_cleared: u32,
    /// Heuristic rating, higher is better
    pub rating: i64,
}

impl Placement {
    /// Actions that carry out this placement in a session
    pub fn actions(&self) -> impl Iterator<Item = GameAction> {
        let slide = if self.shift < 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        std::iter::repeat(GameAction::Rotate)
            .take(self.rotations as usize)
            .chain(std::iter::repeat(slide).take(self.shift.unsigned_abs() as usize))
            .chain(std::iter::once(GameAction::HardDrop))
    }
}

/// Board features the rating is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    pub aggregate_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
}

impl BoardFeatures {
    pub fn of(board: &Board) -> Self {
        let width = usize::from(board.width());
        let height = usize::from(board.height());
        let heights: Vec<usize> = (0..width).map(|x| board.column_height(x)).collect();

        let holes = heights
            .iter()
            .enumerate()
            .map(|(x, &h)| {
                (height - h..height)
                    .filter(|&y| !board.is_occupied(x as i16, y as i16))
                    .count()
            })
            .sum::<usize>();

        let bumpiness = heights
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .sum::<usize>();

        Self {
            aggregate_height: heights.iter().sum::<usize>() as u32,
            holes: holes as u32,
            bumpiness: bumpiness as u32,
        }
    }
}

/// Rate a board after a placement cleared `lines_cleared` lines
pub fn rate(board: &Board, lines_cleared: u32) -> i64 {
    let f = BoardFeatures::of(board);
    LINES_WEIGHT * i64::from(lines_cleared)
        + HEIGHT_WEIGHT * i64::from(f.aggregate_height)
        + HOLES_WEIGHT * i64::from(f.holes)
        + BUMPINESS_WEIGHT * i64::from(f.bumpiness)
}

/// Every placement reachable from `piece`'s current position.
///
/// Rotations are tried in place (as a session would rotate) and stop at the
/// first blocked one; slides are checked one column at a time.
pub fn candidate_placements(board: &Board, piece: &Tetromino) -> Vec<Placement> {
    let mut placements = Vec::new();
    let mut rotated = *piece;

    for rotations in 0..4u8 {
        if rotations > 0 {
            rotated = rotated.with_shape(rotate_tetromino(&rotated));
        }
        if check_collision(board, &rotated, 0, 0) {
            break;
        }

        for direction in [-1i8, 1] {
            // Shift 0 is only reported once, on the left pass
            let mut shift: i8 = if direction < 0 { 0 } else { 1 };
            while !check_collision(board, &rotated, shift, 0) {
                placements.push(evaluate(board, &rotated, rotations, shift));
                shift += direction;
            }
        }
    }

    placements
}

fn evaluate(board: &Board, piece: &Tetromino, rotations: u8, shift: i8) -> Placement {
    let shifted = piece.moved(shift, 0);
    let landed = shifted.moved(0, drop_distance(board, &shifted));
    let cleared = clear_lines(&merge_tetromino(board, &landed));

    let mut rating = rate(&cleared.board, cleared.lines_cleared);
    if landed.cells().any(|(_, y)| y < 0) {
        rating += OVERFLOW_PENALTY;
    }

    Placement {
        rotations,
        shift,
        x: shifted.position.x,
        lines_cleared: cleared.lines_cleared,
        rating,
    }
}

/// Highest-rated reachable placement; the first one found wins ties
pub fn best_placement(board: &Board, piece: &Tetromino) -> Option<Placement> {
    candidate_placements(board, piece)
        .into_iter()
        .fold(None, |best: Option<Placement>, p| match best {
            Some(b) if b.rating >= p.rating => Some(b),
            _ => Some(p),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PieceKind, BOARD_WIDTH};

    #[test]
    fn test_features_of_empty_board() {
        assert_eq!(BoardFeatures::of(&Board::new()), BoardFeatures::default());
    }

    #[test]
    fn test_features_count_holes_and_bumps() {
        let mut board = Board::new();
        board.set(0, 18, Cell::filled("red"));
        // (0, 19) left empty under it
        board.set(1, 19, Cell::filled("red"));

        let f = BoardFeatures::of(&board);
        assert_eq!(f.aggregate_height, 3);
        assert_eq!(f.holes, 1);
        // |2-1| + |1-0|
        assert_eq!(f.bumpiness, 2);
    }

    #[test]
    fn test_candidates_cover_every_column_for_o() {
        let board = Board::new();
        let piece = Tetromino::spawn(PieceKind::O);
        let xs: Vec<i8> = candidate_placements(&board, &piece)
            .iter()
            .filter(|p| p.rotations == 0)
            .map(|p| p.x)
            .collect();
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, (0..=8).collect::<Vec<i8>>());
        assert_eq!(xs.len(), sorted.len());
    }

    #[test]
    fn test_prefers_completing_a_line() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i16 {
            if !(3..7).contains(&x) {
                board.set(x, 19, Cell::filled("red"));
            }
        }
        let piece = Tetromino::spawn(PieceKind::I);
        let best = best_placement(&board, &piece).unwrap();
        assert_eq!(best.lines_cleared, 1);
        assert_eq!((best.rotations, best.x), (0, 3));
    }

    #[test]
    fn test_actions_sequence() {
        let placement = Placement {
            rotations: 2,
            shift: -3,
            x: 0,
            lines_cleared: 0,
            rating: 0,
        };
        let actions: Vec<_> = placement.actions().collect();
        assert_eq!(
            actions,
            vec![
                GameAction::Rotate,
                GameAction::Rotate,
                GameAction::MoveLeft,
                GameAction::MoveLeft,
                GameAction::MoveLeft,
                GameAction::HardDrop,
            ]
        );
    }
}
