//! Board snapshots.
//!
//! A recorded board is a string of rows joined by `\n`, one character per
//! cell. `X` and `O` are marks; every other character is an empty cell.

use tracing::{instrument, trace};

/// The all-empty 3x3 board shown before a replay starts.
pub const EMPTY_BOARD: &str = "___\n___\n___";

/// One cell of a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Player X's mark.
    X,
    /// Player O's mark.
    O,
    /// No mark (placeholder or unrecognised character).
    Empty,
}

impl Cell {
    /// Classifies a snapshot character.
    pub fn from_char(c: char) -> Self {
        match c {
            'X' => Cell::X,
            'O' => Cell::O,
            _ => Cell::Empty,
        }
    }

    /// Visible glyph, if any.
    pub fn glyph(self) -> Option<char> {
        match self {
            Cell::X => Some('X'),
            Cell::O => Some('O'),
            Cell::Empty => None,
        }
    }

    /// Style class for occupied cells.
    pub fn style_class(self) -> Option<&'static str> {
        match self {
            Cell::X => Some("cell-x"),
            Cell::O => Some("cell-o"),
            Cell::Empty => None,
        }
    }

    /// True for X and O.
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// A rendered board: rows of cells, replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardView {
    rows: Vec<Vec<Cell>>,
}

impl BoardView {
    /// The empty 3x3 grid.
    pub fn empty() -> Self {
        render(EMPTY_BOARD)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Visible text of the board: glyphs, with spaces for empty cells.
    pub fn visible_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.glyph().unwrap_or(' '))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders a board snapshot.
///
/// Never fails: a trailing `\r` on a row is ignored and unknown characters
/// become empty cells.
#[instrument(level = "trace", skip(state))]
pub fn render(state: &str) -> BoardView {
    let rows: Vec<Vec<Cell>> = state
        .split('\n')
        .map(|row| {
            row.strip_suffix('\r')
                .unwrap_or(row)
                .chars()
                .map(Cell::from_char)
                .collect()
        })
        .collect();
    trace!(rows = rows.len(), "Rendered board");
    BoardView { rows }
}
