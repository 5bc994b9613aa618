//! Commit a placement, clear completed lines and score the result.
//!
//! One call runs the whole sequence for a drop:
//! validate -> commit -> detect -> clear -> score. A rejected drop leaves the
//! board untouched; an accepted one always leaves the piece's cells filled
//! unless they were on a cleared line.

use serde::Serialize;

use crate::core::{check_placement, find_completed_lines, Board, Piece, Rejection, ScoringRules};
use crate::types::{Callout, GridPos, PaletteIndex, CLEAR_STAGGER_MS};

/// One emptied cell, for driving the clear effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClearedCell {
    pub pos: GridPos,
    /// Palette the cell held before it was cleared
    pub palette_index: PaletteIndex,
    /// Manhattan distance from the placed piece's centroid
    pub distance: f64,
}

impl ClearedCell {
    /// Suggested start delay for this cell's effect
    pub fn delay_ms(&self) -> u32 {
        (self.distance * CLEAR_STAGGER_MS as f64).round() as u32
    }
}

/// Everything a presenter or score keeper needs to know about one accepted drop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearResult {
    pub origin: GridPos,
    /// Palette of the placed piece
    pub palette_index: PaletteIndex,
    /// Absolute cells the piece was committed to
    pub placed_cells: Vec<GridPos>,
    pub cleared_rows: Vec<usize>,
    pub cleared_cols: Vec<usize>,
    pub lines_cleared: usize,
    pub score_delta: u32,
    /// Mean of the placed cells (not of the cleared ones)
    pub centroid: (f64, f64),
    /// Union of all cleared cells, nearest to the centroid first
    pub cleared_cells: Vec<ClearedCell>,
}

impl ClearResult {
    pub fn is_clear(&self) -> bool {
        self.lines_cleared > 0
    }

    pub fn callout(&self) -> Option<Callout> {
        Callout::for_lines(self.lines_cleared)
    }
}

/// Runs placements against a board with a fixed set of scoring rules
#[derive(Debug, Clone, Default)]
pub struct ClearEngine {
    rules: ScoringRules,
}

impl ClearEngine {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Place `piece` at `origin`, then clear and score any completed lines.
    pub fn attempt_place(
        &self,
        board: &mut Board,
        piece: &Piece,
        origin: GridPos,
    ) -> Result<ClearResult, Rejection> {
        if let Err(rejection) = check_placement(board, piece, origin) {
            log::trace!("placement rejected: {rejection}");
            return Err(rejection);
        }

        let placed_cells: Vec<GridPos> = piece.absolute_cells(origin).collect();
        for cell in &placed_cells {
            board.occupy(cell.x, cell.y, piece.palette_index());
        }

        let centroid = centroid(&placed_cells);
        let lines = find_completed_lines(&*board);
        let lines_cleared = lines.lines();

        let mut cleared_cells = Vec::new();
        for pos in lines.cells(board.size()) {
            let Some(palette_index) = board.palette_at(pos.x, pos.y) else {
                continue;
            };
            board.clear(pos.x, pos.y);
            cleared_cells.push(ClearedCell {
                pos,
                palette_index,
                distance: pos.manhattan_to(centroid.0, centroid.1),
            });
        }
        cleared_cells.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.pos.y.cmp(&b.pos.y))
                .then(a.pos.x.cmp(&b.pos.x))
        });

        let score_delta = self.rules.score(lines_cleared);
        if lines_cleared > 0 {
            log::debug!(
                "cleared {} lines (rows {:?}, cols {:?}), score +{}",
                lines_cleared,
                lines.rows,
                lines.cols,
                score_delta
            );
        }

        Ok(ClearResult {
            origin,
            palette_index: piece.palette_index(),
            placed_cells,
            cleared_rows: lines.rows,
            cleared_cols: lines.cols,
            lines_cleared,
            score_delta,
            centroid,
            cleared_cells,
        })
    }
}

fn centroid(cells: &[GridPos]) -> (f64, f64) {
    if cells.is_empty() {
        return (0.0, 0.0);
    }
    let n = cells.len() as f64;
    let (sx, sy) = cells
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
    (sx / n, sy / n)
}
