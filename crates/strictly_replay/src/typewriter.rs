//! Typewriter reveal engine.
//!
//! The engine is a small state machine driven by an external clock. Each
//! [`Typewriter::tick`] reveals exactly one character; the position is kept
//! as a segment index plus a byte offset, so a tick never rescans text that
//! is already shown. Fast-forward rebuilds the output with
//! [`render_segments`], the same append routine the ticks use.

use derive_getters::Getters;
use tracing::{debug, instrument, trace};

use crate::output::{RevealOutput, render_segments};
use crate::seat::Highlight;
use crate::segment::Segment;

/// Lifecycle of one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum AnimationState {
    /// Nothing has been started.
    #[default]
    Idle,
    /// Characters remain to be revealed.
    Animating,
    /// Everything is revealed.
    Finished,
}

/// Where the next character comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct RevealPosition {
    /// Index of the current segment.
    segment: usize,
    /// Byte offset inside the current segment.
    offset: usize,
}

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One character was revealed.
    Revealed(char),
    /// No characters were left; the reveal is now finished.
    ///
    /// Reported once per reveal, and only when the reveal ran to its end.
    Completed,
    /// The engine was not animating.
    Inactive,
}

/// Incremental reveal of a segment sequence.
#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    state: AnimationState,
    segments: Vec<Segment>,
    position: RevealPosition,
    output: RevealOutput,
}

impl Typewriter {
    /// Creates an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// True while characters remain to be revealed.
    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Animating
    }

    /// Segments of the current reveal.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Position of the next character.
    pub fn position(&self) -> RevealPosition {
        self.position
    }

    /// Output revealed so far.
    pub fn output(&self) -> &RevealOutput {
        &self.output
    }

    /// Starts revealing `segments`, replacing any reveal in flight.
    #[instrument(skip(self, segments), fields(segments = segments.len(), previous = %self.state))]
    pub fn start(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.position = RevealPosition::default();
        self.output.clear();
        self.state = AnimationState::Animating;
        debug!("Typewriter started");
    }

    /// Reveals the next character.
    pub fn tick(&mut self) -> Tick {
        if self.state != AnimationState::Animating {
            return Tick::Inactive;
        }
        match self.next_char() {
            Some((ch, style)) => {
                self.output.push_char(ch, style);
                trace!(?ch, "Revealed character");
                Tick::Revealed(ch)
            }
            None => {
                self.state = AnimationState::Finished;
                debug!("Typewriter completed");
                Tick::Completed
            }
        }
    }

    /// Snaps to the fully revealed output.
    ///
    /// Only acts while animating; returns whether it did. Completion is not
    /// reported for a fast-forwarded reveal.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn finish_immediately(&mut self) -> bool {
        if self.state != AnimationState::Animating {
            return false;
        }
        self.output = render_segments(&self.segments);
        self.position = RevealPosition {
            segment: self.segments.len(),
            offset: 0,
        };
        self.state = AnimationState::Finished;
        debug!("Typewriter fast-forwarded");
        true
    }

    /// Returns to idle with nothing revealed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the revealed output out, leaving the engine empty.
    pub fn take_output(&mut self) -> RevealOutput {
        std::mem::take(&mut self.output)
    }

    fn next_char(&mut self) -> Option<(char, Option<Highlight>)> {
        loop {
            let segment = self.segments.get(self.position.segment)?;
            let text = segment.text();
            match text[self.position.offset..].chars().next() {
                Some(ch) => {
                    self.position.offset += ch.len_utf8();
                    if self.position.offset >= text.len() {
                        self.position.segment += 1;
                        self.position.offset = 0;
                    }
                    return Some((ch, segment.style()));
                }
                None => {
                    self.position.segment += 1;
                    self.position.offset = 0;
                }
            }
        }
    }
}
