//! Reasoning text segmentation.
//!
//! Recorded reasoning wraps its parts in `<think>` and `<answer>` blocks.
//! The scanner below splits the text into tag and content segments in
//! original order. Only the four literal tags are recognised; anything else
//! that looks like markup stays content. Tags do not have to balance.

use strum::IntoEnumIterator;
use tracing::{instrument, trace};

use crate::seat::Highlight;

/// The fixed tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Tag {
    /// `<think>`
    ThinkOpen,
    /// `</think>`
    ThinkClose,
    /// `<answer>`
    AnswerOpen,
    /// `</answer>`
    AnswerClose,
}

impl Tag {
    /// Literal text of the tag.
    pub fn literal(self) -> &'static str {
        match self {
            Tag::ThinkOpen => "<think>",
            Tag::ThinkClose => "</think>",
            Tag::AnswerOpen => "<answer>",
            Tag::AnswerClose => "</answer>",
        }
    }

    /// Tag starting at the beginning of `text`, if any.
    fn at_start(text: &str) -> Option<Tag> {
        Tag::iter().find(|tag| text.starts_with(tag.literal()))
    }
}

/// A unit of reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A structural tag, always highlighted.
    Tag {
        /// Which tag.
        tag: Tag,
        /// Highlight of the acting player.
        style: Highlight,
    },
    /// Text between tags.
    Content {
        /// The text, never empty.
        text: String,
        /// Highlight inside an answer block, `None` elsewhere.
        style: Option<Highlight>,
    },
}

impl Segment {
    /// Characters this segment reveals.
    pub fn text(&self) -> &str {
        match self {
            Segment::Tag { tag, .. } => tag.literal(),
            Segment::Content { text, .. } => text,
        }
    }

    /// Style of every character in this segment.
    pub fn style(&self) -> Option<Highlight> {
        match self {
            Segment::Tag { style, .. } => Some(*style),
            Segment::Content { style, .. } => *style,
        }
    }

    /// True for tag segments.
    pub fn is_tag(&self) -> bool {
        matches!(self, Segment::Tag { .. })
    }
}

/// Splits reasoning text into styled segments.
///
/// A line break segment follows every `</think>` to separate the thought
/// from the answer. Content inside `<answer>`..`</answer>` carries
/// `highlight`. Empty spans are dropped.
#[instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn segment(text: &str, highlight: Highlight) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut in_answer = false;
    let mut rest = text;

    while let Some((start, tag)) = find_tag(rest) {
        push_content(&mut segments, &rest[..start], in_answer.then_some(highlight));
        segments.push(Segment::Tag {
            tag,
            style: highlight,
        });
        match tag {
            Tag::ThinkClose => segments.push(Segment::Content {
                text: "\n".to_string(),
                style: None,
            }),
            Tag::AnswerOpen => in_answer = true,
            Tag::AnswerClose => in_answer = false,
            Tag::ThinkOpen => {}
        }
        rest = &rest[start + tag.literal().len()..];
    }
    push_content(&mut segments, rest, in_answer.then_some(highlight));

    trace!(segments = segments.len(), "Segmented reasoning");
    segments
}

/// Leftmost tag in `haystack` with its byte offset.
fn find_tag(haystack: &str) -> Option<(usize, Tag)> {
    haystack
        .match_indices('<')
        .find_map(|(i, _)| Tag::at_start(&haystack[i..]).map(|tag| (i, tag)))
}

fn push_content(segments: &mut Vec<Segment>, text: &str, style: Option<Highlight>) {
    if !text.is_empty() {
        segments.push(Segment::Content {
            text: text.to_string(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_skips_unknown_markup() {
        assert_eq!(find_tag("a <b> <answer>"), Some((6, Tag::AnswerOpen)));
        assert_eq!(find_tag("<thinking>"), None);
    }

    #[test]
    fn test_find_tag_leftmost_wins() {
        assert_eq!(find_tag("x</answer><think>"), Some((1, Tag::AnswerClose)));
    }

    #[test]
    fn test_every_tag_literal_is_recognised() {
        for tag in Tag::iter() {
            assert_eq!(Tag::at_start(tag.literal()), Some(tag));
        }
        assert_eq!(Tag::iter().count(), 4);
    }

    #[test]
    fn test_tag_at_start_requires_full_literal() {
        assert_eq!(Tag::at_start("</think"), None);
        assert_eq!(Tag::at_start("</think>rest"), Some(Tag::ThinkClose));
    }
}
