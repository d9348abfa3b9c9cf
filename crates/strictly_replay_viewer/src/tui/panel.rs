//! Player reasoning panels.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_replay::{Emphasis, Highlight, Piece, RevealOutput, Seat};
use unicode_width::UnicodeWidthStr;

use super::app::App;

/// Style of a highlight token.
pub fn highlight_style(highlight: Highlight) -> Style {
    match highlight {
        Highlight::PlayerZero => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Highlight::PlayerOne => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Converts revealed output to styled lines.
///
/// Line break pieces end the current line; runs map to spans.
pub fn output_lines(output: &RevealOutput) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for run in output.runs() {
        let style = run.style().map(highlight_style).unwrap_or_default();
        for piece in run.pieces() {
            match piece {
                Piece::Text(text) => current.push(Span::styled(text.clone(), style)),
                Piece::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Rows `lines` occupy when wrapped to `width` columns.
///
/// Counts by display width, so it can undercount slightly where word
/// wrapping breaks early.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| {
            let cols: usize = line.spans.iter().map(|s| s.content.as_ref().width()).sum();
            cols.div_ceil(width).max(1)
        })
        .sum()
}

/// Renders `seat`'s panel, scrolled so the newest text is visible.
pub fn render_panel(f: &mut Frame, area: Rect, app: &App, seat: Seat) {
    let viewer = app.viewer();
    let panel = viewer.panel(seat);

    let (border_style, text_style) = match panel.emphasis() {
        Emphasis::Active => (
            highlight_style(seat.highlight()),
            Style::default(),
        ),
        Emphasis::Dimmed => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        Emphasis::Neutral => (Style::default(), Style::default()),
    };

    let lines = match viewer.panel_output(seat) {
        Some(output) => {
            let mut lines = output_lines(output);
            let live = viewer.cursor().live_seat() == Some(seat) && viewer.is_animating();
            if live && let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(
                    app.cursor_glyph().to_string(),
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            lines
        }
        None => panel
            .placeholder_text()
            .lines()
            .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)))
            .collect(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Player {} ", seat));
    let inner = block.inner(area);
    let scroll = wrapped_height(&lines, inner.width).saturating_sub(usize::from(inner.height));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(text_style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_replay::{render_segments, segment};

    #[test]
    fn test_output_lines_split_on_breaks() {
        let output = render_segments(&segment("<think>a</think>b", Highlight::PlayerZero));
        let lines = output_lines(&output);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].content, "b");
    }

    #[test]
    fn test_wrapped_height_counts_wide_lines() {
        let lines = vec![Line::from("abcdefghij"), Line::from("")];
        assert_eq!(wrapped_height(&lines, 4), 4);
    }
}
