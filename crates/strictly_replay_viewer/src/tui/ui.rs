//! Stateless UI rendering for the replay viewer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_replay::{Indicator, Seat};

use super::app::App;
use super::board::render_board;
use super::panel::render_panel;

/// Draws the whole viewer.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Panels and board
            Constraint::Length(3), // Control
        ])
        .split(area);

    let title = Paragraph::new("Strictly Replay - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(chunks[1]);

    render_panel(f, middle[0], app, Seat::Zero);
    render_center(f, middle[1], app);
    render_panel(f, middle[2], app, Seat::One);

    render_control(f, chunks[2], app);
}

fn render_center(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(7)])
        .split(area);

    let board_block = Block::default().borders(Borders::ALL).title(" Board ");
    let board_area = board_block.inner(chunks[0]);
    f.render_widget(board_block, chunks[0]);
    render_board(f, board_area, app.viewer().board());

    let indicator = app.viewer().indicator();
    let style = match indicator {
        Indicator::Error(_) => Style::default().fg(Color::Red),
        Indicator::GameOver { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(indicator.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status, chunks[1]);
}

fn render_control(f: &mut Frame, area: Rect, app: &App) {
    let control = app.viewer().control();
    let button_style = if *control.enabled() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };

    let help = if *control.enabled() {
        "Space/Enter: advance | Q: quit"
    } else {
        "Q: quit"
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", control.label()), button_style),
        Span::raw("   "),
        Span::styled(help, Style::default().fg(Color::Gray)),
    ]);
    let bar = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
