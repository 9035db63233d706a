use crate::enums::HttpMethod;
use crate::path::PathError;
use thiserror::Error;

/// Routing-time outcomes. `Dispatcher::dispatch` turns them into responses; only
/// `Dispatcher::resolve` hands them to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("method {method} is not supported")]
    MethodNotSupported { method: String },
    #[error("no route registered for method {method}")]
    MethodNotRegistered { method: HttpMethod },
    #[error("no route matched for method {method} and path '{path}'")]
    NotFound { method: HttpMethod, path: String },
    #[error(transparent)]
    MalformedPath(#[from] PathError),
}
