mod error;
mod lexer;

pub use error::{PatternError, PatternResult};
pub use lexer::{Token, parse_pattern, VARIABLE_MARKER, WILDCARD};
