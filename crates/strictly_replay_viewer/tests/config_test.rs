//! Tests for viewer configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use strictly_replay_viewer::ViewerConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(*config.tick_interval_ms(), 5);
    assert_eq!(config.tick_interval(), Duration::from_millis(5));
    assert_eq!(config.log_file(), &PathBuf::from("strictly_replay.log"));
    assert_eq!(config.cursor_glyph(), "▋");
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("tick_interval_ms = 20\n");
    let config = ViewerConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.tick_interval_ms(), 20);
    assert_eq!(config.cursor_glyph(), "▋");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
tick_interval_ms = 1
log_file = "replay.log"
cursor_glyph = "_"
log_filter = "debug"
"#,
    );
    let config = ViewerConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config.log_file(), &PathBuf::from("replay.log"));
    assert_eq!(config.cursor_glyph(), "_");
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_zero_interval_rejected() {
    let file = write_config("tick_interval_ms = 0\n");
    let err = ViewerConfig::from_file(file.path()).expect_err("Zero interval should fail");
    assert!(err.message.contains("tick_interval_ms"));
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("speed = 3\n");
    let err = ViewerConfig::from_file(file.path()).expect_err("Unknown key should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = ViewerConfig::load_or_default(dir.path().join("absent.toml"))
        .expect("Missing file should use defaults");
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_setters_and_validate() {
    let config = ViewerConfig::default()
        .with_tick_interval_ms(0)
        .validate();
    assert!(config.is_err());

    let config = ViewerConfig::default()
        .with_cursor_glyph("|")
        .validate()
        .expect("Valid config");
    assert_eq!(config.cursor_glyph(), "|");
}
