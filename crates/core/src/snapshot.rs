//! Snapshot module - serializable views of the board and pieces for presenters

use serde::Serialize;

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{GridPos, PaletteIndex};

/// Board contents by row: 0 = empty, `palette + 1` = filled
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub rows: Vec<Vec<u16>>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let rows = board
            .cells()
            .chunks(board.size())
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(0, |p| u16::from(p) + 1))
                    .collect()
            })
            .collect();
        Self {
            size: board.size(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub cells: Vec<GridPos>,
    pub palette: PaletteIndex,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            cells: piece.cells().to_vec(),
            palette: piece.palette_index(),
        }
    }
}
