//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the block-placement puzzle: the board,
//! piece shapes, placement legality, line detection and scoring. It has no
//! dependencies on rendering, input or I/O beyond loading configuration.
//!
//! - **Deterministic**: the same seed produces the same pieces (for bots and replays)
//! - **Read-only queries**: validation, detection and preview never mutate the board
//!
//! # Module Structure
//!
//! - [`board`]: `size x size` grid with bounds-checked cell access and full-line checks
//! - [`pieces`]: validated shapes, palette-tagged pieces and the standard catalog
//! - [`placement`]: legality of a piece at an origin, and whether it fits anywhere
//! - [`lines`]: completed row/column detection over the board or a hypothetical overlay
//! - [`preview`]: shadow and pending-clear preview for a hovered piece
//! - [`scoring`]: line-clear points and the running score
//! - [`rng`]: seeded piece supply
//! - [`config`]: engine configuration loading and validation
//! - [`snapshot`]: serializable views for presenters
//!
//! # Game Rules
//!
//! - A piece may be placed only where every one of its cells lands on an empty cell
//! - After a placement, every full row and full column is emptied at once
//! - A cell on both a full row and a full column is emptied once
//! - Nothing shifts after a clear; the rest of the board stays where it is
//!
//! # Example
//!
//! ```
//! use block_blast_core::{can_place, Board, Piece};
//! use block_blast_core::types::GridPos;
//!
//! let board = Board::new(8);
//! let piece = Piece::parse("##\n##", 0).unwrap();
//! assert!(can_place(&board, &piece, GridPos::new(6, 6)));
//! assert!(!can_place(&board, &piece, GridPos::new(7, 7)));
//! ```

pub mod board;
pub mod config;
pub mod lines;
pub mod pieces;
pub mod placement;
pub mod preview;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use lines::{find_completed_lines, CompletedLines, Occupancy, Overlay};
pub use pieces::{standard_catalog, Piece, Shape, ShapeError, MAX_OFFSET};
pub use placement::{
    can_place, check_placement, has_any_legal_placement, legal_origins, RejectReason, Rejection,
};
pub use preview::{preview, Preview};
pub use rng::{PieceSupplier, SimpleRng};
pub use scoring::{ScoreBoard, ScoringRules};
pub use snapshot::{BoardSnapshot, PieceSnapshot};
