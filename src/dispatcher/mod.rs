mod builder;
mod errors;
mod service;
mod values;

pub use builder::DispatcherBuilder;
pub use errors::DispatchError;
pub use service::Dispatcher;
pub use values::{capture, captures};
