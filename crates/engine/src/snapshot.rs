use serde::Serialize;

use crate::core::{Board, Tetromino};
use crate::types::PieceKind;

/// Read-only view of a session for rendering layers.
///
/// Serializes to the same `{filled, color}` cell layout the board uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Tetromino>,
    /// Landing row of the active piece
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_speed_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
