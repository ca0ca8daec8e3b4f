//! Character classes used when splitting text into words and punctuation

use unicode_normalization::char::is_combining_mark;

/// Letters, digits and the marks attached to them
pub fn is_word_forming(ch: char) -> bool {
    ch.is_alphanumeric() || is_combining_mark(ch)
}

pub fn is_punctuation(ch: char) -> bool {
    !is_word_forming(ch) && !ch.is_whitespace() && !ch.is_control()
}
