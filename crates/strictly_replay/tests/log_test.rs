//! Tests for the replay log data model.

use strictly_replay::{LogError, NextUp, ReplayLog, Seat, TurnKind, TurnRecord};

const RECORDED: &str = r#"{
    "history": [
        {"player": 0, "state": "___\n___\n___", "actions": "X(1,1)", "llm_response": "<think>a</think><answer>X(1,1)</answer>"},
        {"player": 1, "state": "___\n_X_\n___", "actions": "O(0,0)", "llm_response": null},
        {"player": -1, "state": "O__\n_X_\n___"}
    ],
    "frames": [{"step": 0}, {"step": 1}]
}"#;

#[test]
fn test_deserialize_recorded_log() {
    let log: ReplayLog = serde_json::from_str(RECORDED).expect("Valid log JSON");
    assert_eq!(log.len(), 3);
    assert_eq!(log.frames().len(), 2);
    assert_eq!(log.real_turn_count(), 2);
    assert!(log.validate().is_ok());

    let second = log.turn(1).expect("Second turn");
    assert_eq!(second.llm_response(), "");
    assert_eq!(second.kind(), TurnKind::Move(Seat::One));

    let last = log.turn(2).expect("Terminal record");
    assert!(last.is_terminal());
    assert_eq!(last.actions(), "");
    assert_eq!(last.kind(), TurnKind::Terminal);
}

#[test]
fn test_explicit_terminal_flag() {
    let json = r#"{"history": [{"player": 0, "state": "XXX", "is_terminal": true, "result": "X wins"}]}"#;
    let log: ReplayLog = serde_json::from_str(json).expect("Valid log JSON");
    let record = log.turn(0).expect("Record");
    assert!(record.is_terminal());
    assert_eq!(log.result_for(record), Some("X wins".to_string()));
}

#[test]
fn test_validate_rejects_empty_history() {
    let log = ReplayLog::new(Vec::new());
    assert_eq!(log.validate(), Err(LogError::EmptyHistory));
}

#[test]
fn test_validate_rejects_unknown_player() {
    let log = ReplayLog::new(vec![
        TurnRecord::new(0, "___", "X", ""),
        TurnRecord::new(2, "X__", "?", ""),
    ]);
    let err = log.validate().expect_err("Player 2 is not a seat");
    assert_eq!(err, LogError::UnknownPlayer { index: 1, player: 2 });
    assert_eq!(err.to_string(), "Turn 1 names unknown player 2");
}

#[test]
fn test_summary_for_middle_and_last_turn() {
    let log = ReplayLog::new(vec![
        TurnRecord::new(0, "___", "X(0,0)", ""),
        TurnRecord::new(1, "X__", "O(0,1)", ""),
    ]);

    let first = log.summary_for(0).expect("Summary");
    assert_eq!(*first.next(), NextUp::Player(Seat::One));
    assert_eq!(
        first.to_string(),
        "Player 0 chose action <X(0,0)>\nTurn 1 completed.\nNow Player 1 taking action..."
    );

    let last = log.summary_for(1).expect("Summary");
    assert_eq!(*last.next(), NextUp::GameOver);
    assert_eq!(*last.turn_number(), 2);
}

#[test]
fn test_no_summary_for_terminal_record() {
    let log = ReplayLog::new(vec![TurnRecord::terminal("XXX", None)]);
    assert!(log.summary_for(0).is_none());
    assert!(log.summary_for(5).is_none());
}

#[test]
fn test_log_round_trips_through_json() {
    let log: ReplayLog = serde_json::from_str(RECORDED).expect("Valid log JSON");
    let json = serde_json::to_string(&log).expect("Serializable");
    let back: ReplayLog = serde_json::from_str(&json).expect("Reparse");
    assert_eq!(log, back);
}
