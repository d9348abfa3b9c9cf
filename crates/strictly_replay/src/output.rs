//! Revealed output tree.
//!
//! Revealed characters are grouped into runs. A character joins the last
//! run when it has the same style, otherwise it opens a new run, so the
//! tree grows with style changes rather than with characters. Line breaks
//! are explicit pieces inside a run.

use derive_getters::Getters;
use tracing::instrument;

use crate::markup;
use crate::seat::Highlight;
use crate::segment::Segment;

/// Part of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Contiguous characters without line breaks.
    Text(String),
    /// An explicit line break.
    LineBreak,
}

/// A maximal sequence of revealed characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Run {
    /// Style of every character in the run.
    style: Option<Highlight>,
    /// Text and line break pieces in order.
    pieces: Vec<Piece>,
}

impl Run {
    fn new(style: Option<Highlight>) -> Self {
        Self {
            style,
            pieces: Vec::new(),
        }
    }

    fn push(&mut self, ch: char) {
        if ch == '\n' {
            self.pieces.push(Piece::LineBreak);
            return;
        }
        match self.pieces.last_mut() {
            Some(Piece::Text(text)) => text.push(ch),
            _ => self.pieces.push(Piece::Text(ch.to_string())),
        }
    }

    /// Visible text, line breaks as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Append-only output of a typewriter reveal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealOutput {
    runs: Vec<Run>,
}

impl RevealOutput {
    /// Creates empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs in reveal order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// True before anything has been revealed.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Appends one character with the given style.
    pub fn push_char(&mut self, ch: char, style: Option<Highlight>) {
        match self.runs.last_mut() {
            Some(run) if run.style == style => run.push(ch),
            _ => {
                let mut run = Run::new(style);
                run.push(ch);
                self.runs.push(run);
            }
        }
    }

    /// Appends every character of `text` with the given style.
    pub fn push_str(&mut self, text: &str, style: Option<Highlight>) {
        for ch in text.chars() {
            self.push_char(ch, style);
        }
    }

    /// Drops everything revealed so far.
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Visible text without styling.
    pub fn to_plain(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Serialises the tree to styled markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            markup::write_run(&mut out, run);
        }
        out
    }
}

/// Builds the complete output for `segments` in a single pass.
///
/// Uses the same append routine as the tick-by-tick reveal, so the result
/// equals what a reveal produces once every character is shown.
#[instrument(level = "debug", skip(segments), fields(segments = segments.len()))]
pub fn render_segments(segments: &[Segment]) -> RevealOutput {
    let mut output = RevealOutput::new();
    for segment in segments {
        output.push_str(segment.text(), segment.style());
    }
    output
}
