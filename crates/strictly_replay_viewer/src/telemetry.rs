//! Tracing setup.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `path` so it does not disturb the terminal UI.
///
/// `RUST_LOG` overrides `default_filter`. Does nothing if a subscriber is
/// already installed.
pub fn init_file_tracing(path: &Path, default_filter: &str) -> anyhow::Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(path = %path.display(), "File tracing initialized");
    Ok(())
}

/// Sends tracing output to stderr, keeping stdout for command output.
pub fn init_stderr_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
