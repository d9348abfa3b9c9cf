//! Board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use strictly_replay::{BoardView, Cell};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Renders the board centered in `area`, one box per cell.
///
/// Rows and columns that do not fit in `area` are clipped.
pub fn render_board(f: &mut Frame, area: Rect, board: &BoardView) {
    let widest = board.rows().iter().map(Vec::len).max().unwrap_or(0);
    let rows = u16::try_from(board.row_count())
        .unwrap_or(u16::MAX)
        .min(fitting(area.height, CELL_HEIGHT));
    let cols = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .min(fitting(area.width, CELL_WIDTH));
    if rows == 0 || cols == 0 {
        return;
    }

    let width = cols
        .saturating_mul(CELL_WIDTH)
        .saturating_add(cols.saturating_sub(1));
    let height = rows
        .saturating_mul(CELL_HEIGHT)
        .saturating_add(rows.saturating_sub(1));
    let board_area = center_rect(area, width, height);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleave(rows, CELL_HEIGHT))
        .split(board_area);

    for (i, row) in board.rows().iter().take(usize::from(rows)).enumerate() {
        let row_area = row_areas[i * 2];
        render_row(f, row_area, row, cols);
        if let Some(sep) = row_areas.get(i * 2 + 1) {
            render_separator(f, *sep);
        }
    }
}

/// Number of `size` cells, with one-cell gaps, that fit in `extent`.
fn fitting(extent: u16, size: u16) -> u16 {
    extent.saturating_add(1) / (size + 1)
}

/// Cell sizes separated by one-cell gaps.
fn interleave(count: u16, size: u16) -> Vec<Constraint> {
    let mut constraints = Vec::new();
    for i in 0..count {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(size));
    }
    constraints
}

fn render_row(f: &mut Frame, area: Rect, row: &[Cell], cols: u16) {
    let col_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(interleave(cols, CELL_WIDTH))
        .split(area);

    for col in 0..usize::from(cols) {
        let cell = row.get(col).copied().unwrap_or(Cell::Empty);
        render_square(f, col_areas[col * 2], cell);
        if let Some(sep) = col_areas.get(col * 2 + 1) {
            render_vertical_sep(f, *sep);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, cell: Cell) {
    let style = match cell {
        Cell::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::Empty => Style::default().fg(Color::DarkGray),
    };
    let text = cell.glyph().map(String::from).unwrap_or_default();
    // Vertically center the glyph in the box.
    let inner = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
