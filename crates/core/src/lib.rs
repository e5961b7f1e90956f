//! Core rules engine - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game and nothing else.
//! Every operation takes a board or piece by reference and returns a new
//! value; nothing here mutates its arguments, keeps global state, or does I/O.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells and line clearing
//! - [`shape`]: occupancy matrices and clockwise rotation
//! - [`pieces`]: the seven-piece catalog and piece instances
//! - [`rng`]: uniform random piece factory
//! - [`collision`]: legality of a piece at a proposed offset
//! - [`lock`]: stamping a piece into the board
//! - [`scoring`]: line-clear points, levels and fall speed
//!
//! # Example
//!
//! ```
//! use blockfall_core::{
//!     calculate_score, check_collision, clear_lines, create_empty_board, drop_distance,
//!     merge_tetromino, Tetromino,
//! };
//! use blockfall_core::types::PieceKind;
//!
//! let board = create_empty_board();
//! let piece = Tetromino::spawn(PieceKind::O);
//! assert!(!check_collision(&board, &piece, 0, 1));
//!
//! // Hard drop, lock, clear
//! let landed = piece.moved(0, drop_distance(&board, &piece));
//! let board = merge_tetromino(&board, &landed);
//! let result = clear_lines(&board);
//! assert_eq!(result.lines_cleared, 0);
//! assert_eq!(calculate_score(result.lines_cleared, 1), Ok(0));
//! ```

pub mod board;
pub mod collision;
pub mod error;
pub mod lock;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use board::{clear_lines, create_empty_board, Board, ClearResult};
pub use collision::{check_collision, drop_distance, is_grounded};
pub use error::RulesError;
pub use lock::merge_tetromino;
pub use pieces::{definition, rotate_tetromino, spawn_position, Tetromino, TetrominoDef, TETROMINOES};
pub use rng::{get_random_tetromino, random_kind, random_tetromino};
pub use scoring::{calculate_level, calculate_score, drop_interval, get_drop_speed};
pub use shape::{Shape, MAX_SHAPE_SIZE};
