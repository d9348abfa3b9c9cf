//! Turn state machine.
//!
//! [`ReplayViewer`] owns a replay's position and everything on screen. A
//! single input, [`ReplayViewer::advance`], moves it forward; its meaning
//! depends on the current state:
//!
//! | State                      | `advance()`                                 |
//! |----------------------------|---------------------------------------------|
//! | reasoning being revealed   | fast-forward, then complete the turn        |
//! | idle, turns remain         | start the next turn (or show game over)     |
//! | past the last turn         | reset to the initial state                  |
//!
//! The clock calls [`ReplayViewer::tick`]; a reveal that runs to its end
//! completes the turn through the same routine as a fast-forward.

use tracing::{debug, info, instrument, warn};

use crate::board::{self, BoardView};
use crate::cursor::ReplayCursor;
use crate::log::{ReplayLog, TurnKind};
use crate::output::RevealOutput;
use crate::presentation::{
    Control, ControlLabel, Emphasis, Indicator, Panel, PanelContent,
};
use crate::seat::Seat;
use crate::segment::segment;
use crate::typewriter::Tick;

/// What an [`advance`](ReplayViewer::advance) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No log is loaded; nothing changed.
    Unavailable,
    /// A turn's reveal started.
    TurnStarted {
        /// Index of the turn.
        turn: usize,
        /// Acting player.
        seat: Seat,
    },
    /// The reveal in flight was fast-forwarded and its turn completed.
    Interrupted {
        /// Index of the turn.
        turn: usize,
    },
    /// The terminal pseudo-turn was shown.
    GameOver {
        /// Index of the terminal record.
        turn: usize,
    },
    /// The replay went back to its initial state.
    Reset,
}

/// Step-through viewer over one replay log.
#[derive(Debug, Clone)]
pub struct ReplayViewer {
    log: Option<ReplayLog>,
    cursor: ReplayCursor,
    board: BoardView,
    panels: [Panel; 2],
    indicator: Indicator,
    control: Control,
}

impl ReplayViewer {
    /// Creates a viewer in its initial state.
    #[instrument(skip(log), fields(turns = log.len()))]
    pub fn new(log: ReplayLog) -> Self {
        info!("Replay viewer ready");
        Self {
            log: Some(log),
            cursor: ReplayCursor::new(),
            board: BoardView::empty(),
            panels: [Panel::new(Seat::Zero), Panel::new(Seat::One)],
            indicator: Indicator::Prompt,
            control: Control::default(),
        }
    }

    /// Creates a viewer that has no log to show.
    ///
    /// The indicator reports `reason` and the control stays disabled.
    #[instrument(skip(reason))]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(%reason, "Replay viewer has no log");
        Self {
            log: None,
            cursor: ReplayCursor::new(),
            board: BoardView::empty(),
            panels: [Panel::new(Seat::Zero), Panel::new(Seat::One)],
            indicator: Indicator::Error(reason),
            control: Control::disabled(),
        }
    }

    /// The log being replayed.
    pub fn log(&self) -> Option<&ReplayLog> {
        self.log.as_ref()
    }

    /// Current position.
    pub fn cursor(&self) -> &ReplayCursor {
        &self.cursor
    }

    /// Index of the current turn; see [`ReplayCursor`].
    pub fn turn_index(&self) -> Option<usize> {
        self.cursor.turn
    }

    /// True while a reveal is in flight.
    pub fn is_animating(&self) -> bool {
        self.cursor.is_animating()
    }

    /// Board currently shown.
    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Both player panels, seat 0 first.
    pub fn panels(&self) -> &[Panel; 2] {
        &self.panels
    }

    /// Panel of `seat`.
    pub fn panel(&self, seat: Seat) -> &Panel {
        &self.panels[seat.index()]
    }

    /// Revealed text shown in `seat`'s panel, `None` while it shows its
    /// placeholder.
    pub fn panel_output(&self, seat: Seat) -> Option<&RevealOutput> {
        match self.panel(seat).content() {
            PanelContent::Placeholder => None,
            PanelContent::Live => Some(self.cursor.typewriter.output()),
            PanelContent::Transcript(output) => Some(output),
        }
    }

    /// Status line.
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    /// The advance control.
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Handles the advance input.
    #[instrument(skip(self), fields(turn = ?self.cursor.turn, animating = self.is_animating()))]
    pub fn advance(&mut self) -> Advance {
        let Some(len) = self.log.as_ref().map(ReplayLog::len) else {
            debug!("Advance ignored without a log");
            return Advance::Unavailable;
        };

        if self.cursor.is_animating()
            && let Some(turn) = self.cursor.turn
        {
            self.cursor.typewriter.finish_immediately();
            self.complete_turn(turn);
            info!(turn, "Turn fast-forwarded");
            return Advance::Interrupted { turn };
        }

        let next = self.cursor.turn.map_or(0, |turn| turn + 1);
        if next >= len {
            self.reset();
            return Advance::Reset;
        }
        self.start_turn(next)
    }

    /// Drives the reveal by one clock tick.
    pub fn tick(&mut self) -> Tick {
        let tick = self.cursor.typewriter.tick();
        if tick == Tick::Completed
            && let Some(turn) = self.cursor.turn
        {
            self.complete_turn(turn);
        }
        tick
    }

    fn start_turn(&mut self, index: usize) -> Advance {
        let Some(log) = self.log.as_ref() else {
            return Advance::Unavailable;
        };
        let Some(record) = log.turn(index) else {
            return Advance::Unavailable;
        };
        self.cursor.turn = Some(index);
        self.board = board::render(record.state());

        match record.kind() {
            TurnKind::Terminal => {
                let result = log.result_for(record);
                info!(turn = index, ?result, "Reached terminal record");
                self.indicator = Indicator::GameOver { result };
                self.control.set_label(ControlLabel::Restart);
                self.cursor.turn = Some(index + 1);
                Advance::GameOver { turn: index }
            }
            TurnKind::Move(seat) => {
                let segments = segment(record.llm_response(), seat.highlight());

                if let Some(previous) = self.cursor.live_seat.take() {
                    let transcript = self.cursor.typewriter.take_output();
                    self.panels[previous.index()].set_content(PanelContent::Transcript(transcript));
                }
                self.panels[seat.index()].set_emphasis(Emphasis::Active);
                self.panels[seat.index()].set_content(PanelContent::Live);
                self.panels[seat.other().index()].set_emphasis(Emphasis::Dimmed);

                self.indicator = Indicator::Thinking(seat);
                self.cursor.typewriter.start(segments);
                self.cursor.live_seat = Some(seat);
                info!(turn = index, %seat, "Turn started");
                Advance::TurnStarted { turn: index, seat }
            }
        }
    }

    /// Shows the outcome of the real turn at `index`.
    ///
    /// Shared by natural completion and fast-forward.
    fn complete_turn(&mut self, index: usize) {
        let Some(log) = self.log.as_ref() else {
            return;
        };
        let Some(summary) = log.summary_for(index) else {
            warn!(turn = index, "No summary for turn");
            return;
        };

        if let Some(next) = log.turn(index + 1) {
            self.board = board::render(next.state());
        }
        if index + 1 >= log.len() {
            self.control.set_label(ControlLabel::Restart);
            self.cursor.turn = Some(index + 1);
        }
        debug!(turn = index, %summary, "Turn completed");
        self.indicator = Indicator::TurnCompleted(summary);
    }

    fn reset(&mut self) {
        info!("Resetting replay");
        self.cursor.reset();
        self.board = BoardView::empty();
        for panel in &mut self.panels {
            panel.reset();
        }
        self.indicator = Indicator::Prompt;
        self.control = Control::default();
    }
}
