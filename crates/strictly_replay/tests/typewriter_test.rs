//! Tests for the typewriter reveal engine and its output tree.

use strictly_replay::{
    AnimationState, Highlight, Piece, RevealOutput, Tick, Typewriter, render_segments, segment,
};

const HL: Highlight = Highlight::PlayerZero;

const SAMPLES: &[&str] = &[
    "",
    "plain reasoning\nacross lines",
    "<think>ab</think><answer>cd</answer>",
    "<think>The center is open.\nTake it.</think>\n<answer>X(1,1)</answer>",
    "</answer>stray<answer>open <b>bold</b>",
    "<think>é ✓ 漢字 🎲</think><answer>O(0,2)</answer>",
    "<answer>\n\n</answer>",
];

/// Ticks until the engine reports completion, returning the tick count.
fn run_to_completion(typewriter: &mut Typewriter) -> usize {
    let mut ticks = 0;
    loop {
        ticks += 1;
        match typewriter.tick() {
            Tick::Completed => return ticks,
            Tick::Revealed(_) => {}
            Tick::Inactive => panic!("Engine stopped without completing"),
        }
    }
}

#[test]
fn test_new_engine_is_idle() {
    let mut typewriter = Typewriter::new();
    assert_eq!(typewriter.state(), AnimationState::Idle);
    assert_eq!(typewriter.tick(), Tick::Inactive);
    assert!(!typewriter.finish_immediately());
}

#[test]
fn test_one_character_per_tick() {
    let mut typewriter = Typewriter::new();
    typewriter.start(segment("<answer>hi</answer>", HL));
    assert_eq!(typewriter.tick(), Tick::Revealed('<'));
    assert_eq!(typewriter.tick(), Tick::Revealed('a'));
    assert_eq!(typewriter.output().to_plain(), "<a");
}

#[test]
fn test_completion_reported_once() {
    let mut typewriter = Typewriter::new();
    typewriter.start(segment("ab", HL));
    assert_eq!(typewriter.tick(), Tick::Revealed('a'));
    assert_eq!(typewriter.tick(), Tick::Revealed('b'));
    assert_eq!(typewriter.tick(), Tick::Completed);
    assert_eq!(typewriter.state(), AnimationState::Finished);
    assert_eq!(typewriter.tick(), Tick::Inactive);
}

#[test]
fn test_empty_reveal_completes_on_first_tick() {
    let mut typewriter = Typewriter::new();
    typewriter.start(Vec::new());
    assert!(typewriter.is_animating());
    assert_eq!(typewriter.tick(), Tick::Completed);
    assert!(typewriter.output().is_empty());
}

#[test]
fn test_tick_count_matches_characters() {
    let text = "<think>é✓</think><answer>O</answer>";
    let segments = segment(text, HL);
    let chars: usize = segments.iter().map(|s| s.text().chars().count()).sum();
    let mut typewriter = Typewriter::new();
    typewriter.start(segments);
    assert_eq!(run_to_completion(&mut typewriter), chars + 1);
}

#[test]
fn test_natural_finish_matches_single_pass() {
    for text in SAMPLES {
        let segments = segment(text, HL);
        let expected = render_segments(&segments);

        let mut typewriter = Typewriter::new();
        typewriter.start(segments);
        run_to_completion(&mut typewriter);

        assert_eq!(typewriter.output(), &expected, "text: {text:?}");
        assert_eq!(typewriter.output().to_markup(), expected.to_markup());
    }
}

#[test]
fn test_finish_immediately_at_every_point_matches_single_pass() {
    for text in SAMPLES {
        let segments = segment(text, HL);
        let expected = render_segments(&segments);
        let chars: usize = segments.iter().map(|s| s.text().chars().count()).sum();

        for stop_after in 0..=chars {
            let mut typewriter = Typewriter::new();
            typewriter.start(segments.clone());
            for _ in 0..stop_after {
                typewriter.tick();
            }
            assert!(typewriter.finish_immediately());
            assert_eq!(typewriter.state(), AnimationState::Finished);
            assert_eq!(
                typewriter.output().to_markup(),
                expected.to_markup(),
                "text: {text:?}, stopped after {stop_after}"
            );
        }
    }
}

#[test]
fn test_finish_immediately_does_not_report_completion() {
    let mut typewriter = Typewriter::new();
    typewriter.start(segment("abc", HL));
    typewriter.tick();
    assert!(typewriter.finish_immediately());
    assert_eq!(typewriter.tick(), Tick::Inactive);
    assert!(!typewriter.finish_immediately());
}

#[test]
fn test_restart_replaces_reveal_in_flight() {
    let mut typewriter = Typewriter::new();
    typewriter.start(segment("first", HL));
    typewriter.tick();
    typewriter.tick();
    typewriter.start(segment("second", HL));
    assert!(typewriter.output().is_empty());
    assert_eq!(typewriter.position().segment(), &0);
    assert_eq!(typewriter.tick(), Tick::Revealed('s'));
}

#[test]
fn test_run_coalescing() {
    let output = render_segments(&segment("<think>ab</think><answer>cd</answer>", HL));
    let runs: Vec<(Option<Highlight>, String)> = output
        .runs()
        .iter()
        .map(|run| (*run.style(), run.text()))
        .collect();
    assert_eq!(
        runs,
        vec![
            (Some(HL), "<think>".to_string()),
            (None, "ab".to_string()),
            (Some(HL), "</think>".to_string()),
            (None, "\n".to_string()),
            (Some(HL), "<answer>cd</answer>".to_string()),
        ]
    );
    assert_eq!(output.runs()[3].pieces(), &vec![Piece::LineBreak]);
}

#[test]
fn test_adjacent_runs_never_share_style() {
    for text in SAMPLES {
        let output = render_segments(&segment(text, HL));
        for pair in output.runs().windows(2) {
            assert_ne!(pair[0].style(), pair[1].style(), "text: {text:?}");
        }
    }
}

#[test]
fn test_line_breaks_are_explicit_pieces() {
    let mut output = RevealOutput::new();
    output.push_str("a\nb", Some(HL));
    assert_eq!(output.runs().len(), 1);
    assert_eq!(
        output.runs()[0].pieces(),
        &vec![
            Piece::Text("a".to_string()),
            Piece::LineBreak,
            Piece::Text("b".to_string()),
        ]
    );
}

#[test]
fn test_markup_escapes_and_styles() {
    let output = render_segments(&segment("<think>a<b</think><answer>c&d</answer>", HL));
    assert_eq!(
        output.to_markup(),
        "<span class=\"tag-p0\">&lt;think&gt;</span>a&lt;b\
         <span class=\"tag-p0\">&lt;&#x2f;think&gt;</span><br>\
         <span class=\"tag-p0\">&lt;answer&gt;c&amp;d&lt;&#x2f;answer&gt;</span>"
    );
}

#[test]
fn test_take_output_empties_engine() {
    let mut typewriter = Typewriter::new();
    typewriter.start(segment("xy", HL));
    run_to_completion(&mut typewriter);
    let output = typewriter.take_output();
    assert_eq!(output.to_plain(), "xy");
    assert!(typewriter.output().is_empty());
}
