//! Line completion detection
//!
//! The same scan runs against the real board (to execute a clear) and against
//! an [`Overlay`] of the board plus a hypothetical piece (to preview which
//! lines a drop would clear). Nothing here mutates the board.

use serde::Serialize;

use crate::board::Board;
use crate::types::{Coord, GridPos};

/// Read-only view of which cells are filled
pub trait Occupancy {
    fn size(&self) -> usize;

    /// Out-of-bounds cells are never occupied
    fn is_occupied(&self, x: Coord, y: Coord) -> bool;

    fn row_full(&self, y: usize) -> bool {
        y < self.size() && (0..self.size()).all(|x| self.is_occupied(x as Coord, y as Coord))
    }

    fn col_full(&self, x: usize) -> bool {
        x < self.size() && (0..self.size()).all(|y| self.is_occupied(x as Coord, y as Coord))
    }
}

impl Occupancy for Board {
    fn size(&self) -> usize {
        Board::size(self)
    }

    fn is_occupied(&self, x: Coord, y: Coord) -> bool {
        Board::is_occupied(self, x, y)
    }

    fn row_full(&self, y: usize) -> bool {
        Board::row_full(self, y)
    }

    fn col_full(&self, x: usize) -> bool {
        Board::col_full(self, x)
    }
}

/// The board as it would look with `extra` cells filled in
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    board: &'a Board,
    extra: &'a [GridPos],
}

impl<'a> Overlay<'a> {
    pub fn new(board: &'a Board, extra: &'a [GridPos]) -> Self {
        Self { board, extra }
    }
}

impl Occupancy for Overlay<'_> {
    fn size(&self) -> usize {
        self.board.size()
    }

    fn is_occupied(&self, x: Coord, y: Coord) -> bool {
        self.board.is_occupied(x, y)
            || (self.board.is_in_bounds(x, y) && self.extra.contains(&GridPos::new(x, y)))
    }
}

/// Fully occupied rows and columns, each list sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletedLines {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl CompletedLines {
    /// Rows plus columns
    pub fn lines(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// True iff the cell lies on a completed row or column
    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        (y >= 0 && self.rows.contains(&(y as usize))) || (x >= 0 && self.cols.contains(&(x as usize)))
    }

    /// Union of all cells on completed lines, each listed once, row-major.
    pub fn cells(&self, size: usize) -> Vec<GridPos> {
        if self.is_empty() {
            return Vec::new();
        }
        let size = size as Coord;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| GridPos::new(x, y)))
            .filter(|p| self.contains(p.x, p.y))
            .collect()
    }
}

/// Scan every row and column for completion
pub fn find_completed_lines<O: Occupancy + ?Sized>(grid: &O) -> CompletedLines {
    let size = grid.size();
    CompletedLines {
        rows: (0..size).filter(|&y| grid.row_full(y)).collect(),
        cols: (0..size).filter(|&x| grid.col_full(x)).collect(),
    }
}
