//! Placement validation - pure legality queries
//!
//! Placement is all-or-nothing: a piece fits at an origin only if every one of
//! its cells lands on an in-bounds, empty board cell. These functions only
//! read the board, so the input controller may call them as often as it likes
//! while a drag is in progress.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Coord, GridPos};

/// Why a specific cell blocked a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    OutOfBounds,
    Occupied,
}

/// A placement that failed validation, with the first offending cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rejection {
    pub origin: GridPos,
    pub cell: GridPos,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn code(self) -> &'static str {
        match self.reason {
            RejectReason::OutOfBounds => "out_of_bounds",
            RejectReason::Occupied => "occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self.reason {
            RejectReason::OutOfBounds => "piece would extend past the board edge",
            RejectReason::Occupied => "piece would overlap a filled cell",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot place at {}: {} (cell {})",
            self.origin,
            self.message(),
            self.cell
        )
    }
}

impl std::error::Error for Rejection {}

/// Validate a placement, reporting the first cell that fails (in the piece's cell order).
pub fn check_placement(board: &Board, piece: &Piece, origin: GridPos) -> Result<(), Rejection> {
    for cell in piece.absolute_cells(origin) {
        let reason = if !board.is_in_bounds(cell.x, cell.y) {
            RejectReason::OutOfBounds
        } else if !board.is_empty(cell.x, cell.y) {
            RejectReason::Occupied
        } else {
            continue;
        };
        return Err(Rejection {
            origin,
            cell,
            reason,
        });
    }
    Ok(())
}

/// True iff every cell of the piece at `origin` is in bounds and empty
pub fn can_place(board: &Board, piece: &Piece, origin: GridPos) -> bool {
    piece
        .absolute_cells(origin)
        .all(|cell| board.is_in_bounds(cell.x, cell.y) && board.is_empty(cell.x, cell.y))
}

/// Every board cell as an anchor, in row-major order.
///
/// Anchors are board coordinates; `can_place` decides whether the offsets
/// land on the board from there.
fn candidate_origins(board: &Board) -> impl Iterator<Item = GridPos> {
    let size = board.size() as Coord;
    (0..size).flat_map(move |y| (0..size).map(move |x| GridPos::new(x, y)))
}

/// Every legal origin for the piece, in row-major order
pub fn legal_origins<'a>(
    board: &'a Board,
    piece: &'a Piece,
) -> impl Iterator<Item = GridPos> + 'a {
    candidate_origins(board).filter(move |&origin| can_place(board, piece, origin))
}

/// True iff the piece fits somewhere on the board
pub fn has_any_legal_placement(board: &Board, piece: &Piece) -> bool {
    legal_origins(board, piece).next().is_some()
}

/// Cells the drag shadow should light up: the piece's in-bounds, empty cells.
///
/// For an illegal drop this is only part of the piece, matching what the
/// player sees while hovering over a crowded spot.
pub fn shadow(board: &Board, piece: &Piece, origin: GridPos) -> Vec<GridPos> {
    piece
        .absolute_cells(origin)
        .filter(|cell| board.is_empty(cell.x, cell.y))
        .collect()
}
