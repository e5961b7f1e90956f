//! Game orchestration on top of the pure rules
//!
//! - [`session`]: a running game: input actions, gravity ticks, locking,
//!   scoring and spawning
//! - [`snapshot`]: serializable read-only view for renderers
//! - [`place`]: apply a whole placement (rotate, slide, drop) atomically
//! - [`autoplay`]: pick the best placement for a piece
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{best_placement, Session, SessionConfig};
//! use blockfall_engine::place::apply_place;
//!
//! let mut session = Session::new(SessionConfig { seed: Some(7) });
//! for _ in 0..10 {
//!     let Some(piece) = session.active().copied() else { break };
//!     let Some(p) = best_placement(session.board(), &piece) else { break };
//!     apply_place(&mut session, p.x, p.rotations).unwrap();
//! }
//! assert_eq!(session.pieces_locked(), 10);
//! ```

pub mod autoplay;
pub mod place;
pub mod session;
pub mod snapshot;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use autoplay::{best_placement, candidate_placements, Placement};
pub use place::{apply_place, PlaceError};
pub use session::{Session, SessionConfig};
pub use snapshot::GameSnapshot;
