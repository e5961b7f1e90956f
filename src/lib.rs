//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, engine, types}` so
//! callers depend on one package while the implementation lives under `crates/`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
