use crate::trie::TrieError;
use thiserror::Error;

use super::RouterOptionsError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot attach middleware")]
    AttachWhileSealed,
    #[error("router is sealed; cannot replace the not-found handler")]
    NotFoundWhileSealed,
    #[error("router is not sealed; cannot dispatch requests")]
    DispatchWhileMutable,
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
