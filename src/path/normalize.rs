use memchr::memchr;
use std::borrow::Cow;

use super::{PathError, PathResult};

pub const SEPARATOR: u8 = b'/';

/// Strips a single leading and a single trailing separator, so `/a/b` and `/a/b/`
/// yield the same token stream. The root (`/` or the empty string) becomes `""`.
#[inline]
pub fn trim_separators(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Splits a path into its separator-delimited tokens after trimming. Always yields at
/// least one token; empty tokens between doubled separators are preserved.
#[inline]
pub fn tokens(path: &str) -> Tokens<'_> {
    Tokens {
        rest: Some(trim_separators(path)),
    }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match memchr(SEPARATOR, rest.as_bytes()) {
            Some(idx) => {
                self.rest = Some(&rest[idx + 1..]);
                Some(&rest[..idx])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Joins prefixes and a pattern into one absolute pattern: duplicate separators are
/// collapsed and a trailing separator is dropped.
#[tracing::instrument(level = "trace", skip(parts))]
pub fn join_segments<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut output: Vec<u8> = Vec::with_capacity(64);
    output.push(SEPARATOR);
    let mut prev_was_slash = true;

    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !prev_was_slash {
            output.push(SEPARATOR);
            prev_was_slash = true;
        }
        for &byte in part.as_bytes() {
            if byte == SEPARATOR {
                if prev_was_slash {
                    continue;
                }
                prev_was_slash = true;
            } else {
                prev_was_slash = false;
            }
            output.push(byte);
        }
    }

    while output.len() > 1 && output.last() == Some(&SEPARATOR) {
        output.pop();
    }

    // only whole ASCII separators were removed, so the bytes stay valid UTF-8
    String::from_utf8(output)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Decodes `%XX` escapes in a request path. Paths without escapes are borrowed as-is.
///
/// An escape cut short or carrying a non-hex digit, and a decoded byte sequence that is
/// not UTF-8, are errors.
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn decode_percent(path: &str) -> PathResult<Cow<'_, str>> {
    let bytes = path.as_bytes();
    let Some(first) = memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(path));
    };

    let mut output = Vec::with_capacity(bytes.len());
    output.extend_from_slice(&bytes[..first]);

    let mut idx = first;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte != b'%' {
            output.push(byte);
            idx += 1;
            continue;
        }
        if idx + 2 >= bytes.len() {
            return Err(PathError::InvalidPercentEncoding {
                input: path.to_string(),
                index: idx,
            });
        }
        let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2]).ok_or_else(|| {
            PathError::InvalidPercentEncoding {
                input: path.to_string(),
                index: idx,
            }
        })?;
        output.push(value);
        idx += 3;
    }

    String::from_utf8(output)
        .map(Cow::Owned)
        .map_err(|_| PathError::InvalidUtf8AfterDecoding {
            input: path.to_string(),
        })
}

#[inline]
fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some(((hi << 4) | lo) as u8)
}
