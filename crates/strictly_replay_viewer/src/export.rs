//! Non-interactive transcript export.
//!
//! Plays a replay through a headless [`ReplayViewer`], fast-forwarding
//! every turn, and writes what the viewer shows after each step. The export
//! therefore matches the interactive viewer exactly.

use strictly_replay::{Advance, ReplayLog, ReplayViewer, escape, render_board};
use tracing::{debug, instrument};

/// Output format of [`export_transcript`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// HTML fragment with styled spans.
    #[default]
    Markup,
    /// Plain text.
    Plain,
}

/// Renders every turn of `log` in `format`.
#[instrument(skip(log), fields(turns = log.len()))]
pub fn export_transcript(log: &ReplayLog, format: ExportFormat) -> String {
    let mut viewer = ReplayViewer::new(log.clone());
    let mut out = String::new();

    loop {
        match viewer.advance() {
            Advance::TurnStarted { turn, seat } => {
                let pre_board = log
                    .turn(turn)
                    .map(|record| render_board(record.state()).visible_text())
                    .unwrap_or_default();
                viewer.advance();
                let transcript = viewer.panel_output(seat);
                match format {
                    ExportFormat::Markup => {
                        out.push_str(&format!(
                            "<section class=\"turn\">\n<h2>Turn {} &middot; Player {}</h2>\n<pre class=\"board\">{}</pre>\n<div class=\"reasoning\">{}</div>\n<p class=\"indicator\">{}</p>\n</section>\n",
                            turn + 1,
                            seat,
                            escape(&pre_board),
                            transcript.map(|t| t.to_markup()).unwrap_or_default(),
                            viewer.indicator().to_markup(),
                        ));
                    }
                    ExportFormat::Plain => {
                        out.push_str(&format!(
                            "=== Turn {} (Player {}) ===\n{}\n\n{}\n\n{}\n\n",
                            turn + 1,
                            seat,
                            pre_board,
                            transcript.map(|t| t.to_plain()).unwrap_or_default(),
                            viewer.indicator(),
                        ));
                    }
                }
                debug!(turn, "Exported turn");
            }
            Advance::GameOver { .. } => {
                let final_board = viewer.board().visible_text();
                match format {
                    ExportFormat::Markup => {
                        out.push_str(&format!(
                            "<section class=\"game-over\">\n<pre class=\"board\">{}</pre>\n<p class=\"indicator\">{}</p>\n</section>\n",
                            escape(&final_board),
                            viewer.indicator().to_markup(),
                        ));
                    }
                    ExportFormat::Plain => {
                        out.push_str(&format!("=== {} ===\n{}\n", viewer.indicator(), final_board));
                    }
                }
            }
            Advance::Interrupted { .. } => {}
            Advance::Reset | Advance::Unavailable => break,
        }
    }
    out
}
