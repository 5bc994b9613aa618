//! Board module - manages the placement grid
//!
//! The board is a `size x size` grid where each cell is either empty or
//! filled with the palette index of the piece that was placed there.
//! Uses a flat vector in row-major order (y * size + x) for cache locality.
//! Cells are never shifted: clearing a line just empties its cells.

use std::fmt;

use crate::types::{Cell, Coord, PaletteIndex, DEFAULT_BOARD_SIZE};

/// The game board - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with `size` cells per edge.
    ///
    /// A zero size is a programming error; use `EngineConfig::validate` to
    /// reject it before it gets here.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.size + (x as usize))
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both coordinates are within `[0, size)`
    #[inline]
    pub fn is_in_bounds(&self, x: Coord, y: Coord) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Get cell at position (x, y).
    /// Returns None if out of bounds
    pub fn get(&self, x: Coord, y: Coord) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff the cell is in bounds and empty.
    /// Out-of-bounds cells are never placeable.
    pub fn is_empty(&self, x: Coord, y: Coord) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff the cell is in bounds and filled
    pub fn is_occupied(&self, x: Coord, y: Coord) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Palette of the piece that filled this cell
    pub fn palette_at(&self, x: Coord, y: Coord) -> Option<PaletteIndex> {
        self.get(x, y).flatten()
    }

    /// Mark a cell as filled.
    ///
    /// The caller must have validated the placement first: the cell has to be
    /// in bounds and empty. Violations panic in debug builds; in release they
    /// are rejected (returns false) without touching the board.
    pub fn occupy(&mut self, x: Coord, y: Coord, palette: PaletteIndex) -> bool {
        let idx = self.index(x, y);
        debug_assert!(idx.is_some(), "occupy out of bounds at ({x}, {y})");
        let Some(idx) = idx else {
            return false;
        };
        debug_assert!(self.cells[idx].is_none(), "occupy on filled cell ({x}, {y})");
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(palette);
        true
    }

    /// Empty a cell. Returns false only for out-of-bounds coordinates.
    pub fn clear(&mut self, x: Coord, y: Coord) -> bool {
        let idx = self.index(x, y);
        debug_assert!(idx.is_some(), "clear out of bounds at ({x}, {y})");
        match idx {
            Some(idx) => {
                self.cells[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn row_full(&self, y: usize) -> bool {
        if y >= self.size {
            return false;
        }
        let start = y * self.size;
        self.cells[start..start + self.size]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn col_full(&self, x: usize) -> bool {
        if x >= self.size {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(self.size)
            .all(|cell| cell.is_some())
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when no cell is left empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire board
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from `#`/`.` rows (any other non-`.` character counts as filled).
    /// Filled cells get palette 0.
    #[cfg(test)]
    pub fn from_ascii(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), size, "row {y} has the wrong width");
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board.cells[y * size + x] = Some(0);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.is_some() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(8);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(7, 0), Some(7));
        assert_eq!(board.index(0, 1), Some(8));
        assert_eq!(board.index(7, 7), Some(63));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(8, 0), None);
        assert_eq!(board.index(0, 8), None);
    }

    #[test]
    fn test_occupy_then_clear_round_trip() {
        let mut board = Board::new(8);
        assert!(board.occupy(3, 4, 2));
        assert!(!board.is_empty(3, 4));
        assert_eq!(board.palette_at(3, 4), Some(2));

        assert!(board.clear(3, 4));
        assert!(board.is_empty(3, 4));
        assert_eq!(board.palette_at(3, 4), None);
    }

    #[test]
    fn test_out_of_bounds_is_never_empty() {
        let board = Board::new(4);
        assert!(!board.is_empty(-1, 0));
        assert!(!board.is_empty(0, 4));
        assert!(!board.is_occupied(4, 4));
    }

    #[test]
    fn test_row_and_col_full() {
        let board = Board::from_ascii(&["####", "#...", "#...", "#..."]);
        assert!(board.row_full(0));
        assert!(!board.row_full(1));
        assert!(board.col_full(0));
        assert!(!board.col_full(1));
        assert!(!board.row_full(4));
        assert!(!board.col_full(4));
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::from_ascii(&["#.", ".#"]);
        assert_eq!(board.to_string(), "#.\n.#\n");
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut board = Board::from_ascii(&["##", "##"]);
        assert!(board.is_full());
        board.reset();
        assert_eq!(board.occupied_count(), 0);
    }
}
