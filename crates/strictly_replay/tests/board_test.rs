//! Tests for board rendering.

use strictly_replay::{BoardView, Cell, render_board};

#[test]
fn test_render_three_by_three() {
    let board = render_board("XOX\nO_O\nXOX");
    assert_eq!(board.row_count(), 3);
    assert!(board.rows().iter().all(|row| row.len() == 3));
    assert_eq!(board.cell(0, 0), Some(Cell::X));
    assert_eq!(board.cell(0, 0).and_then(Cell::style_class), Some("cell-x"));
    assert_eq!(board.cell(1, 1), Some(Cell::Empty));
    assert_eq!(board.cell(1, 0).and_then(Cell::style_class), Some("cell-o"));
}

#[test]
fn test_placeholder_never_visible() {
    let board = render_board("XOX\nO_O\nXOX");
    assert!(!board.visible_text().contains('_'));
    assert_eq!(board.visible_text(), "XOX\nO O\nXOX");
}

#[test]
fn test_unknown_characters_render_empty() {
    let board = render_board("x?1\n...");
    assert_eq!(board.occupied(), 0);
    assert_eq!(board.cell(0, 0), Some(Cell::Empty));
    assert_eq!(board.cell(1, 2), Some(Cell::Empty));
}

#[test]
fn test_carriage_returns_ignored() {
    let board = render_board("X__\r\n_O_\r\n___");
    assert_eq!(board.rows()[0].len(), 3);
    assert_eq!(board.cell(1, 1), Some(Cell::O));
}

#[test]
fn test_render_is_idempotent() {
    assert_eq!(render_board("X__\n_O_\n__X"), render_board("X__\n_O_\n__X"));
}

#[test]
fn test_empty_board() {
    let board = BoardView::empty();
    assert_eq!(board.row_count(), 3);
    assert_eq!(board.occupied(), 0);
    assert_eq!(board.visible_text(), "   \n   \n   ");
}

#[test]
fn test_ragged_rows_render_best_effort() {
    let board = render_board("XO\nOXO\n");
    assert_eq!(board.row_count(), 3);
    assert_eq!(board.rows()[0].len(), 2);
    assert!(board.rows()[2].is_empty());
}
