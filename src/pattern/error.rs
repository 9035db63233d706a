use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error(
        "wildcard segment must be terminal in '{pattern}': index {segment_index} of {total_segments}"
    )]
    WildcardMustBeTerminal {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("variable segment at index {segment_index} of '{pattern}' is missing a name")]
    VariableMissingName {
        pattern: String,
        segment_index: usize,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
