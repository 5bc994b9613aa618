//! Game-over detection
//!
//! Play ends when pieces remain on offer and none of them fits anywhere.
//! An empty offer is not game over: the caller has to draw new pieces first.

use crate::core::{has_any_legal_placement, Board, Piece};
use crate::types::TrayStatus;

/// True iff `pieces` is non-empty and no piece fits anywhere on the board.
///
/// Returns false for an empty slice; use [`evaluate`] to tell "nothing left"
/// apart from "still playable".
pub fn is_game_over(board: &Board, pieces: &[Piece]) -> bool {
    !pieces.is_empty() && !pieces.iter().any(|piece| has_any_legal_placement(board, piece))
}

/// Which of `pieces` fit somewhere (drives the dimmed look of stuck pieces)
pub fn placeable_mask(board: &Board, pieces: &[Piece]) -> Vec<bool> {
    pieces
        .iter()
        .map(|piece| has_any_legal_placement(board, piece))
        .collect()
}

/// Classify a tray with some slots possibly used up
pub fn evaluate(board: &Board, tray: &[Option<Piece>]) -> TrayStatus {
    let mut remaining = tray.iter().flatten().peekable();
    if remaining.peek().is_none() {
        return TrayStatus::NeedsRespawn;
    }
    if remaining.any(|piece| has_any_legal_placement(board, piece)) {
        TrayStatus::Playable
    } else {
        TrayStatus::GameOver
    }
}
