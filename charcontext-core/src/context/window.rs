//! Character-indexed view over source text

/// Read-only view that addresses a string by character position
#[derive(Debug, Clone)]
pub struct CharText<'a> {
    text: &'a str,
    /// Byte offset of every character, followed by the text length
    boundaries: Vec<usize>,
}

impl<'a> CharText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character at `index`, or `None` when out of range
    pub fn char_at(&self, index: isize) -> Option<char> {
        if index < 0 {
            return None;
        }
        let index = index as usize;
        if index >= self.char_count() {
            return None;
        }
        self.text[self.boundaries[index]..].chars().next()
    }

    /// Clamps a signed character position into `[0, char_count]`
    pub fn clamp(&self, index: isize) -> usize {
        if index <= 0 {
            0
        } else {
            (index as usize).min(self.char_count())
        }
    }

    /// Owned copy of the characters in `[start, end)`. Both ends are
    /// clamped to the text; an inverted range yields an empty string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.char_count();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return String::new();
        }
        self.text[self.boundaries[start]..self.boundaries[end]].to_string()
    }
}
