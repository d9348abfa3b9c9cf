//! Presentation state: indicator text, player panels and the control.
//!
//! These types describe *what* is shown. Front ends decide how.

use std::fmt;

use derive_getters::Getters;
use derive_new::new;

use crate::markup::escape;
use crate::output::RevealOutput;
use crate::seat::Seat;

/// What follows a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextUp {
    /// Another record follows; the other player acts next.
    Player(Seat),
    /// That was the last record.
    GameOver,
}

/// Turn-completed summary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct TurnSummary {
    /// Player who acted.
    player: Seat,
    /// Action text exactly as recorded.
    action: String,
    /// One-based turn number.
    turn_number: usize,
    /// What happens next.
    next: NextUp,
}

impl TurnSummary {
    /// Summary as markup, with the action escaped inside `<code>`.
    pub fn to_markup(&self) -> String {
        format!(
            "Player {} chose action <code>{}</code><br>Turn {} completed.<br>{}",
            self.player,
            escape(&self.action),
            self.turn_number,
            self.closing_line()
        )
    }

    fn closing_line(&self) -> String {
        match self.next {
            NextUp::Player(seat) => format!("Now Player {} taking action...", seat),
            NextUp::GameOver => "Game Over".to_string(),
        }
    }
}

impl fmt::Display for TurnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {} chose action <{}>\nTurn {} completed.\n{}",
            self.player,
            self.action,
            self.turn_number,
            self.closing_line()
        )
    }
}

/// Status line content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Indicator {
    /// Before the replay starts.
    #[default]
    Prompt,
    /// A player's reasoning is being revealed.
    Thinking(Seat),
    /// A turn finished, naturally or by fast-forward.
    TurnCompleted(TurnSummary),
    /// The terminal pseudo-turn was reached.
    GameOver {
        /// Recorded outcome, when known.
        result: Option<String>,
    },
    /// The replay log could not be provided.
    Error(String),
}

impl Indicator {
    /// Indicator as markup.
    pub fn to_markup(&self) -> String {
        match self {
            Indicator::TurnCompleted(summary) => summary.to_markup(),
            other => escape(&other.to_string()).replace('\n', "<br>"),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Prompt => write!(f, "Press 'Next Step'\nto start the replay"),
            Indicator::Thinking(seat) => write!(f, "Player {} is thinking...", seat),
            Indicator::TurnCompleted(summary) => fmt::Display::fmt(summary, f),
            Indicator::GameOver { result: Some(result) } => {
                write!(f, "Game Over! Result: {}", result)
            }
            Indicator::GameOver { result: None } => write!(f, "Game Over!"),
            Indicator::Error(reason) => write!(f, "Error: {}", reason),
        }
    }
}

/// Visual weight of a player panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Neither active nor dimmed.
    #[default]
    Neutral,
    /// The acting player.
    Active,
    /// The waiting player.
    Dimmed,
}

/// What a player panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelContent {
    /// Placeholder text before the player's first turn.
    #[default]
    Placeholder,
    /// The typewriter's output for the turn in progress or just finished.
    Live,
    /// A transcript from an earlier turn.
    Transcript(RevealOutput),
}

/// One player's reasoning panel.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Panel {
    /// Owner of the panel.
    seat: Seat,
    /// Visual weight.
    emphasis: Emphasis,
    /// Panel content.
    content: PanelContent,
}

impl Panel {
    /// Creates a neutral panel showing its placeholder.
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            emphasis: Emphasis::Neutral,
            content: PanelContent::Placeholder,
        }
    }

    /// Placeholder text for this panel.
    pub fn placeholder_text(&self) -> String {
        format!(
            "Press 'Next Step' to start replay...\nPlayer {} reasoning...",
            self.seat
        )
    }

    pub(crate) fn set_emphasis(&mut self, emphasis: Emphasis) {
        self.emphasis = emphasis;
    }

    pub(crate) fn set_content(&mut self, content: PanelContent) {
        self.content = content;
    }

    pub(crate) fn reset(&mut self) {
        self.emphasis = Emphasis::Neutral;
        self.content = PanelContent::Placeholder;
    }
}

/// Label of the single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum ControlLabel {
    /// Step forward.
    #[default]
    #[display("Next Step")]
    NextStep,
    /// Start over after the game ended.
    #[display("Restart Replay")]
    Restart,
}

/// The advance control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Control {
    /// Current label.
    label: ControlLabel,
    /// False only when no replay log is available.
    enabled: bool,
}

impl Control {
    pub(crate) fn set_label(&mut self, label: ControlLabel) {
        self.label = label;
    }

    pub(crate) fn disabled() -> Self {
        Self {
            label: ControlLabel::NextStep,
            enabled: false,
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self {
            label: ControlLabel::NextStep,
            enabled: true,
        }
    }
}
