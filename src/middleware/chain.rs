use std::sync::Arc;

use crate::types::Handler;

/// Transform from the next handler to the wrapped handler.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

pub fn middleware_fn<F>(f: F) -> Middleware
where
    F: Fn(Handler) -> Handler + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Ordered list of interceptors.
///
/// [`MiddlewareChain::compose`] folds the list left to right, so each interceptor wraps
/// everything attached before it. The last attached interceptor is the outermost one: its
/// pre-processing runs first and its post-processing runs last. Post-processing therefore
/// completes in attachment order.
#[derive(Clone, Default)]
pub struct MiddlewareChain {
    stack: Vec<Middleware>,
}

impl std::fmt::Debug for MiddlewareChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareChain")
            .field("len", &self.stack.len())
            .finish()
    }
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, middleware: Middleware) -> &mut Self {
        self.stack.push(middleware);
        self
    }

    pub fn attach_all<I>(&mut self, middlewares: I) -> &mut Self
    where
        I: IntoIterator<Item = Middleware>,
    {
        self.stack.extend(middlewares);
        self
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn compose(&self, terminal: Handler) -> Handler {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "compose",
            middlewares = self.stack.len() as u64
        );
        self.stack
            .iter()
            .fold(terminal, |next, middleware| middleware(next))
    }
}
