//! Placement engine and game session.
//!
//! - [`clear`]: commit a drop, clear completed lines atomically, score the result
//! - [`game_over`]: decide whether any offered piece still fits
//! - [`session`]: tray of offered pieces, running score, respawn and restart
//!
//! Everything is synchronous and single-threaded: one drop is processed at a
//! time, and only [`ClearEngine::attempt_place`] mutates the board.

pub mod clear;
pub mod game_over;
pub mod session;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use clear::{ClearEngine, ClearResult, ClearedCell};
pub use game_over::{evaluate, is_game_over, placeable_mask};
pub use session::{GameSession, PlaceError, SessionSnapshot, TurnOutcome};
