use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid percent-encoding at index {index} in '{input}'")]
    InvalidPercentEncoding { input: String, index: usize },
    #[error("path '{input}' is not valid UTF-8 after percent-decoding")]
    InvalidUtf8AfterDecoding { input: String },
}

pub type PathResult<T> = Result<T, PathError>;
