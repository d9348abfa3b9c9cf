//! Recorded replay log.
//!
//! The log is produced elsewhere (self-play runs) and arrives fully
//! materialized. It is read-only once a viewer holds it.

use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

use crate::presentation::{NextUp, TurnSummary};
use crate::seat::Seat;

/// A complete recorded game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ReplayLog {
    /// Turns in play order.
    history: Vec<TurnRecord>,

    /// Auxiliary frame metadata, passed through untouched.
    #[serde(default)]
    frames: Vec<serde_json::Value>,

    /// Overall outcome text, when the recorder provided one.
    #[serde(default)]
    result: Option<String>,
}

impl ReplayLog {
    /// Creates a log from its turns.
    pub fn new(history: Vec<TurnRecord>) -> Self {
        Self {
            history,
            frames: Vec::new(),
            result: None,
        }
    }

    /// Attaches an overall outcome text.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Number of records, terminal pseudo-turns included.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when there are no records at all.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Record at `index`.
    pub fn turn(&self, index: usize) -> Option<&TurnRecord> {
        self.history.get(index)
    }

    /// Number of records that are real moves.
    pub fn real_turn_count(&self) -> usize {
        self.history.iter().filter(|t| !t.is_terminal()).count()
    }

    /// Checks the structural contract the viewer relies on.
    #[instrument(skip(self), fields(turns = self.history.len()))]
    pub fn validate(&self) -> Result<(), LogError> {
        if self.history.is_empty() {
            return Err(LogError::EmptyHistory);
        }
        for (index, record) in self.history.iter().enumerate() {
            if !record.is_terminal() && Seat::from_player(record.player).is_none() {
                return Err(LogError::UnknownPlayer {
                    index,
                    player: record.player,
                });
            }
        }
        debug!("Replay log validated");
        Ok(())
    }

    /// Builds the turn-completed summary for the real turn at `index`.
    ///
    /// This is the only place the summary is assembled, so a turn that ran
    /// to its natural end and a turn that was fast-forwarded report the same
    /// thing.
    #[instrument(skip(self))]
    pub fn summary_for(&self, index: usize) -> Option<TurnSummary> {
        let record = self.history.get(index)?;
        let seat = record.seat()?;
        let next = if index + 1 < self.history.len() {
            NextUp::Player(seat.other())
        } else {
            NextUp::GameOver
        };
        Some(TurnSummary::new(seat, record.actions.clone(), index + 1, next))
    }

    /// Outcome text for a terminal record: its own result, else the log's.
    pub fn result_for(&self, record: &TurnRecord) -> Option<String> {
        record.result.clone().or_else(|| self.result.clone())
    }
}

/// One ply of the recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Acting player (0 or 1); negative marks a terminal pseudo-turn.
    #[getter(skip)]
    player: i64,

    /// Board before this turn's action.
    state: String,

    /// Human-readable description of the action taken.
    #[serde(default, deserialize_with = "null_as_empty")]
    actions: String,

    /// Raw reasoning transcript, possibly tagged.
    #[serde(default, deserialize_with = "null_as_empty")]
    llm_response: String,

    /// Explicit end-of-game marker.
    #[serde(default)]
    #[getter(skip)]
    is_terminal: bool,

    /// Outcome text carried by a terminal record.
    #[serde(default)]
    result: Option<String>,
}

impl TurnRecord {
    /// Creates a real turn.
    pub fn new(
        player: i64,
        state: impl Into<String>,
        actions: impl Into<String>,
        llm_response: impl Into<String>,
    ) -> Self {
        Self {
            player,
            state: state.into(),
            actions: actions.into(),
            llm_response: llm_response.into(),
            is_terminal: false,
            result: None,
        }
    }

    /// Creates a terminal pseudo-turn showing the final board.
    pub fn terminal(state: impl Into<String>, result: Option<String>) -> Self {
        Self {
            player: -1,
            state: state.into(),
            actions: String::new(),
            llm_response: String::new(),
            is_terminal: true,
            result,
        }
    }

    /// Recorded player identity.
    pub fn player(&self) -> i64 {
        self.player
    }

    /// True for the end-of-game pseudo-turn.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal || self.player < 0
    }

    /// Seat of the acting player for real turns.
    pub fn seat(&self) -> Option<Seat> {
        if self.is_terminal() {
            None
        } else {
            Seat::from_player(self.player)
        }
    }

    /// Classifies the record for the turn state machine.
    ///
    /// Records whose player is neither a seat nor the sentinel only occur
    /// in unvalidated logs; they are shown as terminal.
    pub fn kind(&self) -> TurnKind {
        match self.seat() {
            Some(seat) => TurnKind::Move(seat),
            None => TurnKind::Terminal,
        }
    }
}

/// What the state machine does with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    /// A real move by the given seat.
    Move(Seat),
    /// The end-of-game pseudo-turn.
    Terminal,
}

/// Structural problems in a replay log.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LogError {
    /// The log contains no turns.
    #[display("Replay log has no turns")]
    EmptyHistory,

    /// A non-terminal record names a player other than 0 or 1.
    #[display("Turn {} names unknown player {}", index, player)]
    UnknownPlayer {
        /// Position of the record in the history.
        index: usize,
        /// The offending player value.
        player: i64,
    },
}

impl std::error::Error for LogError {}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
