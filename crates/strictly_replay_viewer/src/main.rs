//! Strictly Replay - Unified CLI
//!
//! Terminal viewer and transcript export for recorded self-play games.

#![warn(missing_docs)]

mod cli;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_replay::ReplayViewer;
use strictly_replay_viewer::{
    ExportFormat, ViewerConfig, export_transcript, init_file_tracing, init_stderr_tracing,
    load_log, run_viewer,
};
use tracing::{info, instrument, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::View {
            log,
            config,
            tick_ms,
        } => run_view(log, config, tick_ms).await,
        Command::Export {
            log,
            config,
            format,
            output,
        } => run_export(log, config, format, output),
    }
}

/// Run the interactive viewer
async fn run_view(log: PathBuf, config: PathBuf, tick_ms: Option<u64>) -> Result<()> {
    let mut config = ViewerConfig::load_or_default(&config)?;
    if let Some(ms) = tick_ms {
        config = config.with_tick_interval_ms(ms).validate()?;
    }

    init_file_tracing(config.log_file(), config.log_filter())?;
    info!(log = %log.display(), "Opening replay");

    let viewer = match load_log(&log) {
        Ok(replay) => ReplayViewer::new(replay),
        Err(e) => {
            warn!(error = %e, "Replay log unavailable");
            ReplayViewer::unavailable(format!("Could not load game data ({})", e.message))
        }
    };

    run_viewer(viewer, &config).await
}

/// Write a transcript to a file or stdout
#[instrument(skip_all, fields(log = %log.display(), %format))]
fn run_export(
    log: PathBuf,
    config: PathBuf,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = ViewerConfig::load_or_default(&config)?;
    init_stderr_tracing(config.log_filter());

    let replay = load_log(&log)?;
    let transcript = export_transcript(&replay, format);

    match output.as_deref() {
        Some(path) => write_file(path, &transcript)?,
        None => print!("{}", transcript),
    }
    info!(turns = replay.len(), "Export finished");
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    info!(path = %path.display(), "Transcript written");
    Ok(())
}
