//! Strictly Replay - pure replay logic for recorded tic-tac-toe self-play
//!
//! This library turns a recorded game log into the visible state of a
//! step-through replay viewer. It performs no I/O; front ends feed it a
//! [`ReplayLog`], call [`ReplayViewer::advance`] on user input and
//! [`ReplayViewer::tick`] on a fixed-period clock, then draw what it exposes.
//!
//! # Architecture
//!
//! - **Board**: textual snapshots to cell grids
//! - **Segment**: reasoning text to tag and content segments
//! - **Output**: append-only styled runs, plus the markup serialisation
//! - **Typewriter**: one-character-per-tick reveal with fast-forward
//! - **Viewer**: the turn state machine driving all of the above
//!
//! # Example
//!
//! ```
//! use strictly_replay::{ReplayLog, ReplayViewer, TurnRecord};
//!
//! let log = ReplayLog::new(vec![TurnRecord::new(
//!     0,
//!     "___\n___\n___",
//!     "X(1,1)",
//!     "<think>center</think><answer>X(1,1)</answer>",
//! )]);
//! let mut viewer = ReplayViewer::new(log);
//! viewer.advance();
//! while viewer.is_animating() {
//!     viewer.tick();
//! }
//! assert_eq!(viewer.turn_index(), Some(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cursor;
mod log;
mod markup;
mod output;
mod presentation;
mod seat;
mod segment;
mod typewriter;
mod viewer;

// Crate-level exports - Board rendering
pub use board::{BoardView, Cell, EMPTY_BOARD, render as render_board};

// Crate-level exports - Replay log
pub use log::{LogError, ReplayLog, TurnKind, TurnRecord};

// Crate-level exports - Seats and styles
pub use seat::{Highlight, Seat};

// Crate-level exports - Segmentation and output
pub use markup::escape;
pub use output::{Piece, RevealOutput, Run, render_segments};
pub use segment::{Segment, Tag, segment};

// Crate-level exports - Typewriter engine
pub use typewriter::{AnimationState, RevealPosition, Tick, Typewriter};

// Crate-level exports - Turn state machine
pub use cursor::ReplayCursor;
pub use presentation::{
    Control, ControlLabel, Emphasis, Indicator, NextUp, Panel, PanelContent, TurnSummary,
};
pub use viewer::{Advance, ReplayViewer};
