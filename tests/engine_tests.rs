//! Placement and line-clear engine tests

use block_blast::core::{
    can_place, has_any_legal_placement, preview, Board, Piece, RejectReason, ScoringRules,
};
use block_blast::engine::{is_game_over, ClearEngine};
use block_blast::types::{Callout, GridPos};

fn single() -> Piece {
    Piece::new([(0, 0)], 0).unwrap()
}

fn hbar(len: i32) -> Piece {
    Piece::new((0..len).map(|x| (x, 0)), 1).unwrap()
}

fn vbar(len: i32) -> Piece {
    Piece::new((0..len).map(|y| (0, y)), 2).unwrap()
}

fn full_board(size: usize) -> Board {
    let mut board = Board::new(size);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            board.occupy(x, y, 0);
        }
    }
    board
}

// ============== Clear Scenarios ==============

#[test]
fn test_completing_row_zero_scores_thirty() {
    let engine = ClearEngine::default();
    let mut board = Board::new(8);

    // Fill row 0 except (7, 0).
    engine
        .attempt_place(&mut board, &hbar(7), GridPos::new(0, 0))
        .unwrap();
    assert!(board.is_empty(7, 0));

    let result = engine
        .attempt_place(&mut board, &single(), GridPos::new(7, 0))
        .unwrap();
    assert_eq!(result.cleared_rows, vec![0]);
    assert!(result.cleared_cols.is_empty());
    assert_eq!(result.lines_cleared, 1);
    assert_eq!(result.score_delta, 30);
    assert_eq!(result.centroid, (7.0, 0.0));
    assert_eq!(result.callout(), Some(Callout::Nice));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_scoring_table_exact() {
    let expected = [(1, 30), (2, 120), (3, 240), (4, 400)];
    let engine = ClearEngine::default();

    for (lines, score) in expected {
        // Fill `lines` rows except column 0, then drop a vertical bar there.
        let mut board = Board::new(8);
        for y in 0..lines {
            engine
                .attempt_place(&mut board, &hbar(7), GridPos::new(1, y))
                .unwrap();
        }
        let result = engine
            .attempt_place(&mut board, &vbar(lines), GridPos::new(0, 0))
            .unwrap();
        assert_eq!(result.lines_cleared, lines as usize);
        assert_eq!(result.score_delta, score, "{} lines", lines);
    }
}

#[test]
fn test_custom_base_per_line() {
    let engine = ClearEngine::new(ScoringRules::new(7, vec![3.0, 6.0, 8.0, 10.0]));
    let mut board = Board::new(4);
    engine
        .attempt_place(&mut board, &hbar(3), GridPos::new(0, 0))
        .unwrap();
    let result = engine
        .attempt_place(&mut board, &single(), GridPos::new(3, 0))
        .unwrap();
    assert_eq!(result.score_delta, 21);
}

#[test]
fn test_row_and_column_share_a_cell() {
    let engine = ClearEngine::default();
    let mut board = Board::new(8);
    engine
        .attempt_place(&mut board, &hbar(7), GridPos::new(1, 4))
        .unwrap();
    engine
        .attempt_place(&mut board, &vbar(4), GridPos::new(0, 0))
        .unwrap();
    engine
        .attempt_place(&mut board, &vbar(3), GridPos::new(0, 5))
        .unwrap();
    // Unrelated cell that must survive.
    engine
        .attempt_place(&mut board, &single(), GridPos::new(5, 6))
        .unwrap();

    let result = engine
        .attempt_place(&mut board, &single(), GridPos::new(0, 4))
        .unwrap();
    assert_eq!(result.cleared_rows, vec![4]);
    assert_eq!(result.cleared_cols, vec![0]);
    assert_eq!(result.lines_cleared, 2);
    assert_eq!(result.cleared_cells.len(), 15);
    assert!(board.is_empty(0, 4));
    assert_eq!(board.occupied_count(), 1);
    assert!(!board.is_empty(5, 6));
}

#[test]
fn test_centroid_uses_placed_cells() {
    let engine = ClearEngine::default();
    let mut board = Board::new(4);
    engine
        .attempt_place(&mut board, &hbar(2), GridPos::new(0, 3))
        .unwrap();
    let piece = Piece::parse("#.\n##", 0).unwrap();
    let result = engine
        .attempt_place(&mut board, &piece, GridPos::new(2, 2))
        .unwrap();
    // (2,2) (2,3) (3,3): mean is (7/3, 8/3)
    assert_eq!(result.cleared_rows, vec![3]);
    let (cx, cy) = result.centroid;
    assert!((cx - 7.0 / 3.0).abs() < 1e-9);
    assert!((cy - 8.0 / 3.0).abs() < 1e-9);
    // (2, 2) was placed but not on the cleared row.
    assert!(!board.is_empty(2, 2));
}

// ============== Rejections ==============

#[test]
fn test_out_of_bounds_is_rejected_without_mutation() {
    let engine = ClearEngine::default();
    let mut board = Board::new(8);
    let err = engine
        .attempt_place(&mut board, &hbar(3), GridPos::new(6, 0))
        .unwrap_err();
    assert_eq!(err.reason, RejectReason::OutOfBounds);
    assert_eq!(err.cell, GridPos::new(8, 0));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_overlap_is_rejected_without_mutation() {
    let engine = ClearEngine::default();
    let mut board = Board::new(8);
    engine
        .attempt_place(&mut board, &single(), GridPos::new(4, 4))
        .unwrap();
    let before = board.clone();
    let err = engine
        .attempt_place(&mut board, &vbar(3), GridPos::new(4, 2))
        .unwrap_err();
    assert_eq!(err.reason, RejectReason::Occupied);
    assert_eq!(board, before);
}

// ============== Preview ==============

#[test]
fn test_preview_matches_commit() {
    let engine = ClearEngine::default();
    let mut board = Board::new(8);
    engine
        .attempt_place(&mut board, &hbar(6), GridPos::new(0, 5))
        .unwrap();

    let piece = hbar(2);
    let origin = GridPos::new(6, 5);
    let p = preview(&board, &piece, origin);
    assert!(p.legal);
    assert_eq!(p.shadow.len(), 2);

    let result = engine.attempt_place(&mut board, &piece, origin).unwrap();
    assert_eq!(p.lines.rows, result.cleared_rows);
    assert_eq!(p.lines.cols, result.cleared_cols);
}

#[test]
fn test_queries_are_idempotent() {
    let mut board = Board::new(8);
    board.occupy(3, 3, 0);
    let piece = Piece::parse("###\n#..", 0).unwrap();
    let origin = GridPos::new(2, 3);

    let first = (
        can_place(&board, &piece, origin),
        has_any_legal_placement(&board, &piece),
        preview(&board, &piece, origin),
    );
    for _ in 0..10 {
        assert_eq!(first.0, can_place(&board, &piece, origin));
        assert_eq!(first.1, has_any_legal_placement(&board, &piece));
        assert_eq!(first.2, preview(&board, &piece, origin));
    }
}

// ============== Game Over ==============

#[test]
fn test_empty_board_is_never_game_over() {
    let board = Board::new(8);
    let pieces = [hbar(5), vbar(5), Piece::parse("###\n###\n###", 0).unwrap()];
    assert!(!is_game_over(&board, &pieces));
}

#[test]
fn test_full_board_is_game_over() {
    let board = full_board(8);
    assert!(is_game_over(&board, &[single()]));
    assert!(is_game_over(&board, &[single(), hbar(2)]));
}

#[test]
fn test_game_over_reopens_after_clear() {
    let engine = ClearEngine::default();
    let mut board = full_board(4);
    board.clear(3, 0);
    // A bar can't go anywhere, but the single fills the hole and clears a row.
    assert!(is_game_over(&board, &[hbar(2)]));
    engine
        .attempt_place(&mut board, &single(), GridPos::new(3, 0))
        .unwrap();
    assert!(!is_game_over(&board, &[hbar(2)]));
}

#[test]
fn test_empty_piece_set_is_not_game_over() {
    assert!(!is_game_over(&full_board(2), &[]));
}

#[test]
fn test_game_over_with_shape_anchored_right_of_its_cells() {
    // Columns 2 and 3 are filled; the only free cells are in columns 0 and 1.
    let mut board = Board::new(4);
    for y in 0..4 {
        board.occupy(2, y, 0);
        board.occupy(3, y, 0);
    }
    let offset_right = Piece::new([(2, 0)], 0).unwrap();
    assert!(!has_any_legal_placement(&board, &offset_right));
    assert!(is_game_over(&board, &[offset_right.clone()]));

    // The same cell without the offset still fits, so the tray is alive.
    assert!(!is_game_over(&board, &[offset_right, single()]));
}

#[test]
fn test_game_over_with_shape_anchored_left_of_its_cells() {
    let board = Board::new(4);
    let far_left = Piece::new([(-4, 0)], 0).unwrap();
    assert!(!has_any_legal_placement(&board, &far_left));
    assert!(is_game_over(&board, &[far_left]));

    let near_left = Piece::new([(-1, 0), (0, 0)], 0).unwrap();
    assert!(has_any_legal_placement(&board, &near_left));
    assert!(!is_game_over(&board, &[near_left]));
}
