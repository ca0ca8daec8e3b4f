//! Context extraction
//!
//! Turns a located match into a fixed-width "before" and "after" snippet
//! for review.

mod extractor;
mod match_context;
mod window;

pub use extractor::{extract, ContextExtractor, DEFAULT_CONTEXT_WIDTH};
pub use match_context::MatchContext;
pub use window::CharText;
