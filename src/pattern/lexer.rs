use smallvec::SmallVec;

use super::{PatternError, PatternResult};
use crate::path::tokens;

pub const VARIABLE_MARKER: char = ':';
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    /// Variable name with the marker stripped.
    Variable(&'a str),
    Wildcard,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn classify(raw: &'a str) -> Self {
        if raw == WILDCARD {
            Token::Wildcard
        } else if let Some(name) = raw.strip_prefix(VARIABLE_MARKER) {
            Token::Variable(name)
        } else {
            Token::Literal(raw)
        }
    }
}

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<SmallVec<[Token<'_>; 8]>> {
    let parsed: SmallVec<[Token<'_>; 8]> = tokens(pattern).map(Token::classify).collect();
    let total_segments = parsed.len();

    for (segment_index, token) in parsed.iter().enumerate() {
        match token {
            Token::Wildcard if segment_index + 1 != total_segments => {
                return Err(PatternError::WildcardMustBeTerminal {
                    pattern: pattern.to_string(),
                    segment_index,
                    total_segments,
                });
            }
            Token::Variable(name) if name.is_empty() => {
                return Err(PatternError::VariableMissingName {
                    pattern: pattern.to_string(),
                    segment_index,
                });
            }
            _ => {}
        }
    }

    Ok(parsed)
}
