//! Piece factory - random piece generation
//!
//! Each draw picks one of the seven kinds uniformly and independently of
//! earlier draws. Pass a seeded RNG to [`random_tetromino`] for reproducible
//! sequences.

use rand::Rng;

use crate::pieces::Tetromino;
use crate::types::PieceKind;

/// Uniformly random kind
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

/// A new piece of random kind at its spawn position
pub fn random_tetromino<R: Rng + ?Sized>(rng: &mut R) -> Tetromino {
    Tetromino::spawn(random_kind(rng))
}

/// A new piece of random kind, drawn from the thread-local RNG
pub fn get_random_tetromino() -> Tetromino {
    random_tetromino(&mut rand::thread_rng())
}
