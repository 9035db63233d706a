use bytes::Bytes;
use std::sync::Arc;

pub type Request = http::Request<Bytes>;
pub type Response = http::Response<Bytes>;

/// Terminal request handler. Shared between the trie and every composed chain.
pub type Handler = Arc<dyn Fn(Request) -> Response + Send + Sync>;

/// Wraps a closure into a [`Handler`].
pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    Arc::new(f)
}
