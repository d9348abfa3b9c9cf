//! Player seats and the highlight styles tied to them.

use tracing::instrument;

/// One of the two recorded players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
)]
pub enum Seat {
    /// Player 0 (moves first, plays X).
    #[display("0")]
    Zero,
    /// Player 1 (plays O).
    #[display("1")]
    One,
}

impl Seat {
    /// Maps a recorded player identity to a seat.
    ///
    /// Returns `None` for anything other than 0 or 1, which includes the
    /// negative sentinel used by terminal pseudo-turns.
    #[instrument(level = "trace")]
    pub fn from_player(player: i64) -> Option<Self> {
        match player {
            0 => Some(Seat::Zero),
            1 => Some(Seat::One),
            _ => None,
        }
    }

    /// Index into two-element per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::Zero => 0,
            Seat::One => 1,
        }
    }

    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Zero => Seat::One,
            Seat::One => Seat::Zero,
        }
    }

    /// Highlight style used for this seat's tags and answer text.
    pub fn highlight(self) -> Highlight {
        match self {
            Seat::Zero => Highlight::PlayerZero,
            Seat::One => Highlight::PlayerOne,
        }
    }
}

/// Style token applied to highlighted reasoning text.
///
/// The string form is the class name written by the markup export.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
pub enum Highlight {
    /// Player 0's tag color.
    #[strum(serialize = "tag-p0")]
    PlayerZero,
    /// Player 1's tag color.
    #[strum(serialize = "tag-p1")]
    PlayerOne,
}

impl Highlight {
    /// Class name for this style (`tag-p0` or `tag-p1`).
    pub fn class_name(self) -> &'static str {
        self.into()
    }
}
