//! Collision detection - legality of a piece at a proposed offset
//!
//! One primitive backs every move: horizontal shifts pass `(±1, 0)`, drops
//! pass `(0, 1)` and post-rotation checks pass `(0, 0)`.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if `piece` shifted by `(dx, dy)` would hit a wall, the floor or a
/// filled cell.
///
/// Cells above the board (`y < 0`) are allowed so pieces can enter from
/// above the top row.
pub fn check_collision(board: &Board, piece: &Tetromino, dx: i8, dy: i8) -> bool {
    let (dx, dy) = (i16::from(dx), i16::from(dy));
    piece.cells().any(|(x, y)| {
        let (x, y) = (x + dx, y + dy);
        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Rows the piece can fall before it would collide (hard drop / ghost piece)
pub fn drop_distance(board: &Board, piece: &Tetromino) -> i8 {
    let mut distance: i8 = 0;
    // A piece can never fall further than the board is tall
    while distance < BOARD_HEIGHT as i8 && !check_collision(board, piece, 0, distance + 1) {
        distance += 1;
    }
    distance
}

/// True if the piece cannot move down one row
pub fn is_grounded(board: &Board, piece: &Tetromino) -> bool {
    check_collision(board, piece, 0, 1)
}
