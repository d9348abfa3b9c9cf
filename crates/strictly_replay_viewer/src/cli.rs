//! Command-line interface for strictly_replay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strictly_replay_viewer::ExportFormat;

/// Strictly Replay - step through recorded self-play games
#[derive(Parser, Debug)]
#[command(name = "strictly_replay")]
#[command(about = "Replay viewer for recorded tic-tac-toe self-play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a replay in the terminal viewer
    View {
        /// Replay log (JSON, or a `const SELFPLAY_LOG = {...};` script)
        log: PathBuf,

        /// Path to viewer config
        #[arg(short, long, default_value = "strictly_replay.toml")]
        config: PathBuf,

        /// Override the reveal interval in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Write a full transcript of a replay without animation
    Export {
        /// Replay log (JSON, or a `const SELFPLAY_LOG = {...};` script)
        log: PathBuf,

        /// Path to viewer config
        #[arg(short, long, default_value = "strictly_replay.toml")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Markup)]
        format: ExportFormat,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
