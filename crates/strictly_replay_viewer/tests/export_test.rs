//! Tests for transcript export.

use strictly_replay::{ReplayLog, TurnRecord};
use strictly_replay_viewer::{ExportFormat, export_transcript};

fn game() -> ReplayLog {
    ReplayLog::new(vec![
        TurnRecord::new(
            0,
            "___\n___\n___",
            "X(1,1)",
            "<think>a & b</think><answer>X(1,1)</answer>",
        ),
        TurnRecord::new(1, "___\n_X_\n___", "O(0,0)", "<think>c</think><answer>O(0,0)</answer>"),
        TurnRecord::terminal("O__\n_X_\n___", Some("Draw".to_string())),
    ])
}

#[test]
fn test_plain_export() {
    let out = export_transcript(&game(), ExportFormat::Plain);

    assert!(out.starts_with("=== Turn 1 (Player 0) ===\n   \n   \n   \n\n"));
    assert!(out.contains("<think>a & b</think>\n<answer>X(1,1)</answer>"));
    assert!(out.contains(
        "Player 0 chose action <X(1,1)>\nTurn 1 completed.\nNow Player 1 taking action..."
    ));
    assert!(out.contains("=== Turn 2 (Player 1) ===\n   \n X \n   "));
    assert!(out.ends_with("=== Game Over! Result: Draw ===\nO  \n X \n   \n"));
    assert_eq!(out.matches("=== Turn").count(), 2);
}

#[test]
fn test_markup_export_escapes_literal_text() {
    let out = export_transcript(&game(), ExportFormat::Markup);

    assert!(out.contains("<h2>Turn 1 &middot; Player 0</h2>"));
    assert!(out.contains("<span class=\"tag-p0\">&lt;think&gt;</span>a &amp; b"));
    assert!(out.contains("<span class=\"tag-p1\">&lt;think&gt;</span>c"));
    assert!(out.contains("<section class=\"game-over\">"));
    assert!(out.contains("Game Over! Result: Draw"));
    assert!(!out.contains("<think>"));
}

#[test]
fn test_export_without_terminal_record() {
    let log = ReplayLog::new(vec![TurnRecord::new(
        0,
        "___\n___\n___",
        "X(0,0)",
        "<answer>X(0,0)</answer>",
    )]);
    let out = export_transcript(&log, ExportFormat::Plain);

    assert!(out.contains("Turn 1 completed.\nGame Over"));
    assert!(!out.contains("Result:"));
}
