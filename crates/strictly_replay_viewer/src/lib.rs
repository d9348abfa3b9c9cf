//! Strictly Replay viewer - terminal front end for recorded self-play
//!
//! Wraps the pure [`strictly_replay`] state machine with everything needed
//! to run it: log loading, configuration, a fixed-period tick clock, a
//! ratatui front end and a non-interactive transcript export.
//!
//! # Example
//!
//! ```no_run
//! use strictly_replay::ReplayViewer;
//! use strictly_replay_viewer::{ViewerConfig, load_log, run_viewer};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ViewerConfig::default();
//! let viewer = ReplayViewer::new(load_log("selfplay_log.json")?);
//! run_viewer(viewer, &config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod export;
mod loader;
mod telemetry;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, ViewerConfig};

// Crate-level exports - Log loading
pub use loader::{LoadError, load_log, parse_log};

// Crate-level exports - Clock
pub use clock::TickClock;

// Crate-level exports - Export
pub use export::{ExportFormat, export_transcript};

// Crate-level exports - Tracing setup
pub use telemetry::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Terminal front end
pub use tui::{App, Flow, draw, run_viewer};
