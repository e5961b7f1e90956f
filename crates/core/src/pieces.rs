//! Pieces module - the tetromino catalog and piece instances
//!
//! Every catalog shape is square (4x4 for I, 2x2 for O, 3x3 otherwise) and
//! top-aligned: row 0 always holds at least one occupied cell, so a piece
//! spawned at `y = 0` shows its top edge on the first board row.

use serde::Serialize;

use crate::shape::Shape;
use crate::types::{PieceKind, Position, BOARD_WIDTH};

/// Catalog entry: spawn orientation and color of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoDef {
    pub shape: Shape,
    pub color: &'static str,
}

/// The seven standard pieces, indexed by [`PieceKind::index`]
pub const TETROMINOES: [TetrominoDef; 7] = [
    // I
    TetrominoDef {
        shape: Shape::from_matrix([[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: "cyan",
    },
    // O
    TetrominoDef {
        shape: Shape::from_matrix([[1, 1], [1, 1]]),
        color: "yellow",
    },
    // T
    TetrominoDef {
        shape: Shape::from_matrix([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: "purple",
    },
    // S
    TetrominoDef {
        shape: Shape::from_matrix([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: "green",
    },
    // Z
    TetrominoDef {
        shape: Shape::from_matrix([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: "red",
    },
    // J
    TetrominoDef {
        shape: Shape::from_matrix([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: "blue",
    },
    // L
    TetrominoDef {
        shape: Shape::from_matrix([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: "orange",
    },
];

/// Catalog entry for a piece kind
pub fn definition(kind: PieceKind) -> &'static TetrominoDef {
    &TETROMINOES[kind.index()]
}

/// Spawn position for a shape: horizontally centered, top row at board row 0
pub fn spawn_position(shape: &Shape) -> Position {
    let x = (BOARD_WIDTH as usize - shape.cols()) / 2;
    Position::new(x as i8, 0)
}

/// A piece in play.
///
/// Owns its shape outright; moving or rotating yields a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tetromino {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: &'static str,
    pub position: Position,
}

impl Tetromino {
    /// Create a piece of the given kind at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let def = definition(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            position: spawn_position(&def.shape),
        }
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    /// Same piece with a different shape, e.g. after rotation
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute board coordinates `(x, y)` of each occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        let (px, py) = (i16::from(self.position.x), i16::from(self.position.y));
        self.shape
            .occupied()
            .map(move |(r, c)| (px + c as i16, py + r as i16))
    }
}

/// The piece's shape rotated 90° clockwise.
///
/// Only computes the new matrix; callers check it against the board with
/// [`check_collision`](crate::collision::check_collision) before using it.
pub fn rotate_tetromino(piece: &Tetromino) -> Shape {
    piece.shape.rotated_cw()
}
