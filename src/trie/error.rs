use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),
    #[error(
        "conflicting variable in '{pattern}': ':{requested}' clashes with ':{existing}' at the same level"
    )]
    ConflictingVariable {
        pattern: String,
        existing: String,
        requested: String,
    },
    #[error("handler already registered for '{pattern}'")]
    DuplicateHandler { pattern: String },
}

pub type TrieResult<T> = Result<T, TrieError>;
