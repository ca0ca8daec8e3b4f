//! Error types for context extraction and scanning

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Match text must not be empty")]
    EmptyMatchText,

    #[error("Invalid match offset {offset}: expected {expected:?}, found {found:?}")]
    InvalidMatchOffset {
        offset: isize,
        expected: char,
        found: Option<char>,
    },

    #[error("Invalid context width: {0}")]
    InvalidWidth(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
