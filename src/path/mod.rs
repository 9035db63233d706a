mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{Tokens, decode_percent, join_segments, tokens, trim_separators};
