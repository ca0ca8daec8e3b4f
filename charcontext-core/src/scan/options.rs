//! Scanner configuration

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::context::DEFAULT_CONTEXT_WIDTH;

/// What the scanner reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Every occurrence of individual characters
    #[default]
    Characters,
    /// Runs of punctuation, classified by word position
    Punctuation,
}

/// Normalization form applied to source text before scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    None,
    Nfc,
    Nfd,
}

impl Normalization {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Normalization::None => text.to_string(),
            Normalization::Nfc => text.nfc().collect(),
            Normalization::Nfd => text.nfd().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub mode: ScanMode,
    /// Characters to report in character mode; empty reports every
    /// non-whitespace character
    pub characters: String,
    pub normalization: Normalization,
    pub context_width: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            characters: String::new(),
            normalization: Normalization::default(),
            context_width: DEFAULT_CONTEXT_WIDTH,
        }
    }
}

impl ScanOptions {
    pub fn characters() -> Self {
        Self::default()
    }

    pub fn punctuation() -> Self {
        Self {
            mode: ScanMode::Punctuation,
            ..Self::default()
        }
    }

    /// Restricts character mode to the given characters
    pub fn with_characters(mut self, characters: &str) -> Self {
        self.characters = characters.to_string();
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_context_width(mut self, width: usize) -> Self {
        self.context_width = width;
        self
    }
}
