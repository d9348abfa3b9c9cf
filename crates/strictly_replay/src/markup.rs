//! Markup serialisation for revealed text and summaries.

use std::borrow::Cow;

use crate::output::{Piece, Run};

/// Escapes text for inclusion in markup, so literal text cannot be read as
/// tags or attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'', '/']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(v_htmlescape::escape(text).to_string())
}

/// Writes one run: styled runs become a `span`, line breaks become `<br>`.
pub(crate) fn write_run(out: &mut String, run: &Run) {
    if let Some(style) = run.style() {
        out.push_str("<span class=\"");
        out.push_str(style.class_name());
        out.push_str("\">");
    }
    for piece in run.pieces() {
        match piece {
            Piece::Text(text) => out.push_str(&escape(text)),
            Piece::LineBreak => out.push_str("<br>"),
        }
    }
    if run.style().is_some() {
        out.push_str("</span>");
    }
}
