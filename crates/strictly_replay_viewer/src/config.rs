//! Viewer configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Settings for the replay viewer, read from TOML.
///
/// Every key is optional:
///
/// ```toml
/// tick_interval_ms = 5
/// log_file = "strictly_replay.log"
/// cursor_glyph = "▋"
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Milliseconds between revealed characters.
    #[serde(default = "default_tick_interval_ms")]
    tick_interval_ms: u64,

    /// File receiving tracing output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Glyph drawn after the text being revealed.
    #[serde(default = "default_cursor_glyph")]
    #[setters(into)]
    cursor_glyph: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,
}

fn default_tick_interval_ms() -> u64 {
    5
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_replay.log")
}

fn default_cursor_glyph() -> String {
    "▋".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            log_file: default_log_file(),
            cursor_glyph: default_cursor_glyph(),
            log_filter: default_log_filter(),
        }
    }
}

impl ViewerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let config = config.validate()?;
        info!(tick_interval_ms = config.tick_interval_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::new(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.cursor_glyph.is_empty() {
            return Err(ConfigError::new("cursor_glyph must not be empty".to_string()));
        }
        Ok(self)
    }

    /// Period of the reveal clock.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
