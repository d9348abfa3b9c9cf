//! Application state and input handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_replay::{Advance, ReplayViewer, Tick};
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::clock::TickClock;
use crate::config::ViewerConfig;

/// Most ticks run between two frames; the rest of a backlog is dropped.
const MAX_TICKS_PER_FRAME: u32 = 64;

/// Input poll timeout while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the viewer.
    Quit,
}

/// Main application state: the replay and its clock.
#[derive(Debug)]
pub struct App {
    viewer: ReplayViewer,
    clock: TickClock,
    cursor_glyph: String,
}

impl App {
    /// Creates the application around a viewer.
    #[instrument(skip(viewer, config))]
    pub fn new(viewer: ReplayViewer, config: &ViewerConfig) -> Self {
        Self {
            viewer,
            clock: TickClock::new(config.tick_interval()),
            cursor_glyph: config.cursor_glyph().clone(),
        }
    }

    /// The replay being shown.
    pub fn viewer(&self) -> &ReplayViewer {
        &self.viewer
    }

    /// The reveal clock.
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Glyph drawn after text being revealed.
    pub fn cursor_glyph(&self) -> &str {
        &self.cursor_glyph
    }

    /// Handles a key press.
    #[instrument(skip(self, key, now), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Flow::Quit,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => {
                self.advance(now);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Advances the replay and keeps the clock in step with it.
    pub fn advance(&mut self, now: Instant) -> Advance {
        let advance = self.viewer.advance();
        match advance {
            Advance::TurnStarted { .. } => self.clock.arm(now),
            _ => self.clock.disarm(),
        }
        debug!(?advance, armed = self.clock.is_armed(), "Advanced");
        advance
    }

    /// Runs every tick due at `now`.
    pub fn on_clock(&mut self, now: Instant) {
        let due = self.clock.due_ticks(now, MAX_TICKS_PER_FRAME);
        for _ in 0..due {
            if self.viewer.tick() == Tick::Completed {
                break;
            }
        }
        if !self.viewer.is_animating() {
            self.clock.disarm();
        }
    }

    /// How long the event loop may wait for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.clock.until_next(now).unwrap_or(IDLE_POLL)
    }
}
