//! Replay log loading.
//!
//! Logs are JSON. Recorded logs are also published as a script assigning the
//! object to a global (`const SELFPLAY_LOG = {...};`); that form is accepted
//! by taking the outermost braces.

use std::path::Path;

use derive_more::{Display, Error};
use strictly_replay::{LogError, ReplayLog};
use tracing::{debug, info, instrument};

/// Reads, parses and validates a replay log file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_log(path: impl AsRef<Path>) -> Result<ReplayLog, LoadError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let log = parse_log(&content)?;
    info!(turns = log.len(), "Replay log loaded");
    Ok(log)
}

/// Parses and validates replay log text.
#[instrument(skip(content), fields(len = content.len()))]
pub fn parse_log(content: &str) -> Result<ReplayLog, LoadError> {
    let json = json_body(content);
    debug!(embedded = json.len() != content.trim().len(), "Parsing replay log");
    let log: ReplayLog = serde_json::from_str(json)?;
    log.validate()?;
    Ok(log)
}

/// The JSON object inside `content`, unwrapping a script assignment.
fn json_body(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Replay log loading error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Load error: {} at {}:{}", message, file, line)]
pub struct LoadError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LoadError {
    /// Creates a new load error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LoadError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read replay log: {}", err))
    }
}

impl From<serde_json::Error> for LoadError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Failed to parse replay log: {}", err))
    }
}

impl From<LogError> for LoadError {
    #[track_caller]
    fn from(err: LogError) -> Self {
        Self::new(format!("Invalid replay log: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_passes_plain_json() {
        assert_eq!(json_body("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_json_body_unwraps_assignment() {
        assert_eq!(json_body("const SELFPLAY_LOG = {\"a\": {}};\n"), "{\"a\": {}}");
    }

    #[test]
    fn test_json_body_without_braces_is_untouched() {
        assert_eq!(json_body("nothing here"), "nothing here");
    }
}
