//! Drag preview: where the shadow goes and which lines a drop would clear.

use serde::Serialize;

use crate::board::Board;
use crate::lines::{find_completed_lines, CompletedLines, Overlay};
use crate::pieces::Piece;
use crate::placement::{can_place, shadow};
use crate::types::GridPos;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub origin: GridPos,
    /// Whether dropping here would be accepted
    pub legal: bool,
    /// In-bounds empty cells under the piece
    pub shadow: Vec<GridPos>,
    /// Lines the drop would complete (always empty for an illegal drop)
    pub lines: CompletedLines,
}

/// Compute the preview for hovering `piece` at `origin`. Idempotent; never mutates.
pub fn preview(board: &Board, piece: &Piece, origin: GridPos) -> Preview {
    let legal = can_place(board, piece, origin);
    let shadow = shadow(board, piece, origin);
    let lines = if legal {
        find_completed_lines(&Overlay::new(board, &shadow))
    } else {
        CompletedLines::default()
    };
    Preview {
        origin,
        legal,
        shadow,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_reports_pending_clear() {
        let board = Board::from_ascii(&["##..", "....", "....", "...."]);
        let piece = Piece::parse("##", 3).unwrap();
        let before = board.clone();

        let p = preview(&board, &piece, GridPos::new(2, 0));
        assert!(p.legal);
        assert_eq!(p.lines.rows, vec![0]);
        assert_eq!(board, before);
        assert_eq!(p, preview(&board, &piece, GridPos::new(2, 0)));
    }

    #[test]
    fn test_illegal_preview_has_no_lines() {
        let board = Board::from_ascii(&["##..", "....", "....", "...."]);
        let piece = Piece::parse("###", 3).unwrap();
        let p = preview(&board, &piece, GridPos::new(2, 0));
        assert!(!p.legal);
        assert_eq!(p.shadow, vec![GridPos::new(2, 0), GridPos::new(3, 0)]);
        assert!(p.lines.is_empty());
    }
}
