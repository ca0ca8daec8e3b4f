use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a match sits relative to the word it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum PositionKind {
    #[default]
    Undefined,
    WordInitial,
    WordMedial,
    WordFinal,
    Isolated,
}

impl PositionKind {
    /// Derives the position from whether each side of the match touches a
    /// word-forming character.
    pub fn from_neighbours(word_before: bool, word_after: bool) -> Self {
        match (word_before, word_after) {
            (false, false) => PositionKind::Isolated,
            (false, true) => PositionKind::WordInitial,
            (true, false) => PositionKind::WordFinal,
            (true, true) => PositionKind::WordMedial,
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, PositionKind::Undefined)
    }

    /// Word-initial and isolated patterns are recorded with a leading
    /// boundary marker in front of the punctuation.
    pub fn has_leading_boundary(&self) -> bool {
        matches!(self, PositionKind::WordInitial | PositionKind::Isolated)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PositionKind::Undefined => "",
            PositionKind::WordInitial => "WordInitial",
            PositionKind::WordMedial => "WordMedial",
            PositionKind::WordFinal => "WordFinal",
            PositionKind::Isolated => "Isolated",
        }
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
