mod chain;
mod json_encoder;
mod request_logger;
mod response_logger;
mod timer;

pub use chain::{Middleware, MiddlewareChain, middleware_fn};
pub use json_encoder::json_encoder;
pub use request_logger::request_logger;
pub use response_logger::response_logger;
pub use timer::timer;
