//! Text scanning
//!
//! Produces the located matches the context extractor consumes.

mod classify;
mod options;
mod scanner;

pub use classify::{is_punctuation, is_word_forming};
pub use options::{Normalization, ScanMode, ScanOptions};
pub use scanner::MatchScanner;
