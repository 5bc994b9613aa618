//! Block Blast (workspace facade crate).
//!
//! Exposes `block_blast::{core, engine, types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use block_blast_core as core;
pub use block_blast_engine as engine;
pub use block_blast_types as types;
