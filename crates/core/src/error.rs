//! Contract violations reported by the rules engine

use thiserror::Error;

/// A caller handed the engine something outside its documented input range.
///
/// These are programmer errors, never expected in normal play. They are
/// returned instead of a best-effort answer because a wrong score or a
/// misshapen board would corrupt the visible game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("cannot score {0} lines cleared at once (expected 0..=4)")]
    LinesOutOfRange(u32),

    #[error("level {0} is out of range (levels start at 1)")]
    LevelOutOfRange(u32),

    #[error("board must be {expected_width}x{expected_height} cells, got {width}x{height}")]
    BoardDimensions {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("score for {lines} lines at level {level} does not fit in u32")]
    ScoreOverflow { lines: u32, level: u32 },

    #[error("invalid shape: {0}")]
    InvalidShape(&'static str),
}
