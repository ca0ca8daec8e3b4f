//! Locates characters and punctuation patterns in source text

use std::collections::HashSet;

use log::debug;

use super::classify::{is_punctuation, is_word_forming};
use super::options::{ScanMode, ScanOptions};
use crate::context::{ContextExtractor, MatchContext};
use crate::error::Result;
use crate::types::{LocatedMatch, MatchPattern, PositionKind, PARAGRAPH_BOUNDARY, SPACE_BOUNDARY};

/// Scans text and builds a [`MatchContext`] for every match found
#[derive(Debug, Clone)]
pub struct MatchScanner {
    options: ScanOptions,
    extractor: ContextExtractor,
    wanted: HashSet<char>,
}

impl MatchScanner {
    pub fn new(options: ScanOptions) -> Result<Self> {
        let extractor = ContextExtractor::with_width(options.context_width)?;
        let wanted = options.characters.chars().collect();
        Ok(Self {
            options,
            extractor,
            wanted,
        })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Finds matches without computing their context
    pub fn locate(&self, reference: &str, text: &str) -> Vec<LocatedMatch> {
        let text = self.options.normalization.apply(text);
        let chars: Vec<char> = text.chars().collect();

        let found = match self.options.mode {
            ScanMode::Characters => self.locate_characters(&chars),
            ScanMode::Punctuation => Self::locate_punctuation(&chars),
        };

        found
            .into_iter()
            .map(|(pattern, offset, kind)| LocatedMatch::new(pattern, offset as isize, text.as_str(), reference, kind))
            .collect()
    }

    /// Scans one source text
    pub fn scan(&self, reference: &str, text: &str) -> Result<Vec<MatchContext>> {
        let located = self.locate(reference, text);
        debug!("{}: {} matches", reference, located.len());
        located
            .iter()
            .map(|m| self.extractor.extract_located(m))
            .collect()
    }

    /// Scans a sequence of `(reference, text)` pairs in order
    pub fn scan_many<I, R, T>(&self, sources: I) -> Result<Vec<MatchContext>>
    where
        I: IntoIterator<Item = (R, T)>,
        R: AsRef<str>,
        T: AsRef<str>,
    {
        let mut contexts = Vec::new();
        for (reference, text) in sources {
            contexts.extend(self.scan(reference.as_ref(), text.as_ref())?);
        }
        Ok(contexts)
    }

    fn locate_characters(&self, chars: &[char]) -> Vec<(MatchPattern, usize, PositionKind)> {
        chars
            .iter()
            .enumerate()
            .filter(|(_, ch)| {
                if self.wanted.is_empty() {
                    !ch.is_whitespace()
                } else {
                    self.wanted.contains(ch)
                }
            })
            .map(|(i, ch)| (MatchPattern::Simple(ch.to_string()), i, PositionKind::Undefined))
            .collect()
    }

    fn locate_punctuation(chars: &[char]) -> Vec<(MatchPattern, usize, PositionKind)> {
        let mut found = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if !is_punctuation(chars[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < chars.len() && is_punctuation(chars[i]) {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();

            let word_before = start > 0 && is_word_forming(chars[start - 1]);
            let word_after = i < chars.len() && is_word_forming(chars[i]);
            let kind = PositionKind::from_neighbours(word_before, word_after);

            // Offset stays on the first punctuation character; the marker is
            // only part of the pattern text
            let pattern = if kind.has_leading_boundary() {
                let marker = if start == 0 { PARAGRAPH_BOUNDARY } else { SPACE_BOUNDARY };
                MatchPattern::with_boundary(marker, &run)
            } else {
                MatchPattern::Simple(run)
            };

            found.push((pattern, start, kind));
        }

        found
    }
}
