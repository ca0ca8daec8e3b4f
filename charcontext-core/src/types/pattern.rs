//! Typed match input

use serde::Serialize;

use super::position::PositionKind;

/// Marker placed in front of a pattern found after whitespace
pub const SPACE_BOUNDARY: char = ' ';
/// Marker placed in front of a pattern found at the start of a paragraph
pub const PARAGRAPH_BOUNDARY: char = '\u{2029}';

/// Text of a match, tagged with how its offset must be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MatchPattern {
    /// The recorded offset is where the text starts
    Simple(String),
    /// The first character is a synthetic boundary marker; the recorded
    /// offset points at the second character
    LeadingBoundary(String),
}

impl MatchPattern {
    /// Chooses the variant from the raw text and position kind
    pub fn classify(text: &str, kind: PositionKind) -> Self {
        if text.chars().count() > 1 && kind.has_leading_boundary() {
            MatchPattern::LeadingBoundary(text.to_string())
        } else {
            MatchPattern::Simple(text.to_string())
        }
    }

    /// Builds a leading-boundary pattern from its marker and the matched run
    pub fn with_boundary(marker: char, run: &str) -> Self {
        let mut text = String::with_capacity(run.len() + marker.len_utf8());
        text.push(marker);
        text.push_str(run);
        MatchPattern::LeadingBoundary(text)
    }

    pub fn text(&self) -> &str {
        match self {
            MatchPattern::Simple(text) | MatchPattern::LeadingBoundary(text) => text,
        }
    }

    pub fn has_leading_boundary(&self) -> bool {
        matches!(self, MatchPattern::LeadingBoundary(_))
    }
}

/// A match as reported by a scanner, before its context is computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedMatch {
    pub pattern: MatchPattern,
    /// Character offset into `source_text`
    pub offset: isize,
    pub source_text: String,
    pub reference: String,
    pub position_kind: PositionKind,
}

impl LocatedMatch {
    pub fn new(
        pattern: MatchPattern,
        offset: isize,
        source_text: impl Into<String>,
        reference: impl Into<String>,
        position_kind: PositionKind,
    ) -> Self {
        Self {
            pattern,
            offset,
            source_text: source_text.into(),
            reference: reference.into(),
            position_kind,
        }
    }
}
