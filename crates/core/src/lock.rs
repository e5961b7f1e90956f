//! Locking - stamping a piece into the board

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::Cell;

/// A copy of `board` with every occupied cell of `piece` filled in the
/// piece's color.
///
/// Cells outside the grid are skipped; they cannot occur when moves were
/// validated with [`check_collision`](crate::collision::check_collision).
pub fn merge_tetromino(board: &Board, piece: &Tetromino) -> Board {
    let mut merged = board.clone();
    let cell = Cell::filled(piece.color);
    for (x, y) in piece.cells() {
        merged.set(x, y, cell);
    }
    merged
}
