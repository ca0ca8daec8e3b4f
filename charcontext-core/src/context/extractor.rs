//! Context window extraction around a located match

use log::trace;

use super::match_context::MatchContext;
use super::window::CharText;
use crate::error::{Error, Result};
use crate::types::{LocatedMatch, MatchPattern, PositionKind};

/// Number of characters shown on each side of a match
pub const DEFAULT_CONTEXT_WIDTH: usize = 50;

/// Computes the before/after snippets for matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextExtractor {
    width: usize,
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self {
            width: DEFAULT_CONTEXT_WIDTH,
        }
    }
}

impl ContextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom window width
    pub fn with_width(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Builds the context for a raw match.
    ///
    /// A multi-character `match_text` found word-initially or in isolation
    /// carries a boundary marker as its first character, and `offset` points
    /// at its second character; the split point is moved back by one.
    pub fn extract(
        &self,
        match_text: &str,
        offset: isize,
        source_text: &str,
        reference: &str,
        position_kind: PositionKind,
    ) -> Result<MatchContext> {
        let pattern = MatchPattern::classify(match_text, position_kind);
        self.build(&pattern, offset, source_text, reference, position_kind)
    }

    /// Builds the context for a match produced by a scanner. The adjustment
    /// is taken from the pattern variant rather than the position kind.
    pub fn extract_located(&self, located: &LocatedMatch) -> Result<MatchContext> {
        self.build(
            &located.pattern,
            located.offset,
            &located.source_text,
            &located.reference,
            located.position_kind,
        )
    }

    fn build(
        &self,
        pattern: &MatchPattern,
        offset: isize,
        source_text: &str,
        reference: &str,
        position_kind: PositionKind,
    ) -> Result<MatchContext> {
        let match_text = pattern.text();
        let match_len = match_text.chars().count();
        if match_len == 0 {
            return Err(Error::EmptyMatchText);
        }

        let source = CharText::new(source_text);
        let adjusted = match pattern {
            MatchPattern::Simple(_) => offset,
            MatchPattern::LeadingBoundary(_) => Self::adjust_for_boundary(&source, match_text, offset)?,
        };

        let split = source.clamp(adjusted);
        let start = split.saturating_sub(self.width);
        let before = source.slice(start, split);

        // The adjusted offset may sit before the text when the marker stands
        // for a paragraph start; the after window is measured from it unclamped
        let after_start = source.clamp(adjusted.saturating_add(match_len as isize));
        let after = source.slice(after_start, after_start.saturating_add(self.width));

        trace!(
            "context for {:?} at {} ({}): {} before, {} after",
            match_text,
            offset,
            reference,
            before.chars().count(),
            after.chars().count()
        );

        Ok(MatchContext::new(
            match_text.to_string(),
            offset,
            source_text.to_string(),
            reference.to_string(),
            position_kind,
            before,
            after,
        ))
    }

    /// The source character at `offset` must be the first character after
    /// the boundary marker.
    fn adjust_for_boundary(source: &CharText<'_>, match_text: &str, offset: isize) -> Result<isize> {
        let expected = match match_text.chars().nth(1) {
            Some(ch) => ch,
            // Single-character text has no marker to skip
            None => return Ok(offset),
        };
        let found = source.char_at(offset);
        if found != Some(expected) {
            return Err(Error::InvalidMatchOffset {
                offset,
                expected,
                found,
            });
        }
        Ok(offset - 1)
    }
}

/// Extracts a context using the default window width
pub fn extract(
    match_text: &str,
    offset: isize,
    source_text: &str,
    reference: &str,
    position_kind: PositionKind,
) -> Result<MatchContext> {
    ContextExtractor::default().extract(match_text, offset, source_text, reference, position_kind)
}
