mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_METHOD_NOT_REGISTERED_MESSAGE, DEFAULT_METHOD_NOT_SUPPORTED_MESSAGE,
    DEFAULT_NOT_FOUND_MESSAGE, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
    validate_prefix,
};
pub use service::Router;
