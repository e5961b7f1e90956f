//! Shared types and constants for the falling-block rules engine
//!
//! Everything here is plain data: board dimensions, the progression curve
//! constants, piece kinds, board cells and the actions a caller can apply.
//! Nothing in this crate knows how pieces move; that lives in `blockfall-core`.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Fall interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor (reached at level 10) |
//! | `LINES_PER_LEVEL` | 10 | Lines needed for each level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! let cell = Cell::filled("red");
//! assert!(cell.is_filled());
//! assert!(!Cell::EMPTY.is_filled());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fall interval at level 1, in milliseconds
pub const BASE_DROP_MS: u32 = 1000;

/// How much faster each level above 1 falls, in milliseconds
pub const DROP_STEP_MS: u32 = 100;

/// The fall interval never drops below this, in milliseconds
pub const MIN_DROP_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Most lines a single lock can clear with the standard pieces
pub const MAX_LINES_PER_CLEAR: u32 = 4;

/// Base points by number of lines cleared at once (index = lines).
///
/// Multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Parse piece kind from its tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "O" => Some(PieceKind::O),
            "T" => Some(PieceKind::T),
            "S" => Some(PieceKind::S),
            "Z" => Some(PieceKind::Z),
            "J" => Some(PieceKind::J),
            "L" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-letter tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// A single board cell.
///
/// An empty cell has no color; a filled cell always has one. The fields are
/// private so that pairing cannot be broken from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Cell {
    filled: bool,
    color: &'static str,
}

impl Cell {
    /// The empty cell: not filled, empty color
    pub const EMPTY: Cell = Cell {
        filled: false,
        color: "",
    };

    /// A filled cell of the given color.
    ///
    /// # Panics
    ///
    /// Panics if `color` is empty.
    pub const fn filled(color: &'static str) -> Self {
        assert!(!color.is_empty(), "a filled cell needs a non-empty color");
        Cell {
            filled: true,
            color,
        }
    }

    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    /// Color tag, `""` for empty cells
    pub const fn color(&self) -> &'static str {
        self.color
    }
}

/// Board-grid offset of a piece's top-left bounding-box corner.
///
/// `y` may go negative while a piece is partly above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Actions an input layer can apply to a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over on an empty board
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// What happened when a piece locked.
///
/// Emitted by the session after merge, line clear and scoring have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Level after the lock
    pub level: u32,
    pub level_up: bool,
}
