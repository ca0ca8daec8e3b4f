//! Display record for a single match

use serde::Serialize;

use crate::types::PositionKind;

/// A match together with the text surrounding it.
///
/// Built by [`ContextExtractor`](super::ContextExtractor) and never changed
/// afterwards, so only accessors are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchContext {
    match_text: String,
    offset: isize,
    #[serde(skip)]
    source_text: String,
    reference: String,
    position_kind: PositionKind,
    before: String,
    after: String,
    key: String,
}

impl MatchContext {
    pub(crate) fn new(
        match_text: String,
        offset: isize,
        source_text: String,
        reference: String,
        position_kind: PositionKind,
        before: String,
        after: String,
    ) -> Self {
        let key = Self::make_key(&match_text, position_kind);
        Self {
            match_text,
            offset,
            source_text,
            reference,
            position_kind,
            before,
            after,
            key,
        }
    }

    /// Grouping key: the match text followed by the position name, if any.
    /// Keys are not injective: `"a"` at `WordFinal` and the literal text
    /// `"aWordFinal"` at `Undefined` share a key.
    pub fn make_key(match_text: &str, position_kind: PositionKind) -> String {
        if position_kind.is_defined() {
            format!("{}{}", match_text, position_kind)
        } else {
            match_text.to_string()
        }
    }

    pub fn match_text(&self) -> &str {
        &self.match_text
    }

    /// Offset as supplied by the scanner, before any adjustment
    pub fn offset(&self) -> isize {
        self.offset
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn position_kind(&self) -> PositionKind {
        self.position_kind
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
