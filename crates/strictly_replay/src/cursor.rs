//! Replay position.

use crate::seat::Seat;
use crate::typewriter::Typewriter;

/// Mutable position of a replay, owned by one [`ReplayViewer`](crate::ReplayViewer).
///
/// `turn` is `None` before the first advance and equals the history length
/// once the game is over and the next advance restarts.
#[derive(Debug, Clone, Default)]
pub struct ReplayCursor {
    pub(crate) turn: Option<usize>,
    pub(crate) typewriter: Typewriter,
    pub(crate) live_seat: Option<Seat>,
}

impl ReplayCursor {
    /// Creates a cursor before the first turn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the current turn.
    pub fn turn(&self) -> Option<usize> {
        self.turn
    }

    /// Reveal engine of the current turn.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Seat whose panel shows the typewriter output.
    pub fn live_seat(&self) -> Option<Seat> {
        self.live_seat
    }

    /// True while the current turn's reasoning is being revealed.
    pub fn is_animating(&self) -> bool {
        self.typewriter.is_animating()
    }

    /// Back to the initial position.
    pub(crate) fn reset(&mut self) {
        self.turn = None;
        self.typewriter.reset();
        self.live_seat = None;
    }
}
