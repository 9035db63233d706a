use crate::dispatcher::{Dispatcher, DispatcherBuilder};
use crate::enums::HttpMethod;
use crate::middleware::Middleware;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::{Handler, Request, Response};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
enum RouterState {
    Building(DispatcherBuilder),
    Sealed(Arc<Dispatcher>),
}

/// Shared register-then-seal router.
///
/// Registration takes the write lock, so routes may be added from any thread until
/// [`Router::seal`]; afterwards registration fails and dispatching only takes the read
/// lock long enough to clone the frozen dispatcher handle.
#[derive(Debug)]
pub struct Router {
    inner: RwLock<RouterState>,
    options: RouterOptions,
}

impl Default for Router {
    fn default() -> Self {
        Self::from_validated(RouterOptions::default())
    }
}

impl Router {
    /// `None` uses the default options; explicit options are validated first.
    pub fn new(options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self::from_validated(options))
    }

    fn from_validated(options: RouterOptions) -> Self {
        Self {
            inner: RwLock::new(RouterState::Building(DispatcherBuilder::from_validated(
                options.clone(),
            ))),
            options,
        }
    }

    pub fn add(&self, method: HttpMethod, pattern: &str, handler: Handler) -> RouterResult<()> {
        let mut guard = self.inner.write();

        match &mut *guard {
            RouterState::Building(builder) => {
                builder.route(method, pattern, handler)?;
                Ok(())
            }
            RouterState::Sealed(_) => Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            }),
        }
    }

    pub fn attach(&self, middleware: Middleware) -> RouterResult<()> {
        let mut guard = self.inner.write();

        match &mut *guard {
            RouterState::Building(builder) => {
                builder.attach(middleware);
                Ok(())
            }
            RouterState::Sealed(_) => Err(RouterError::AttachWhileSealed),
        }
    }

    pub fn set_not_found(&self, handler: Handler) -> RouterResult<()> {
        let mut guard = self.inner.write();

        match &mut *guard {
            RouterState::Building(builder) => {
                builder.not_found(handler);
                Ok(())
            }
            RouterState::Sealed(_) => Err(RouterError::NotFoundWhileSealed),
        }
    }

    /// Freezes the registered routes. Sealing twice is a no-op.
    pub fn seal(&self) {
        let mut guard = self.inner.write();

        if let RouterState::Building(builder) = &mut *guard {
            let builder = std::mem::take(builder);
            *guard = RouterState::Sealed(Arc::new(builder.build()));
        }
    }

    pub fn is_sealed(&self) -> bool {
        matches!(&*self.inner.read(), RouterState::Sealed(_))
    }

    pub fn dispatcher(&self) -> RouterResult<Arc<Dispatcher>> {
        match &*self.inner.read() {
            RouterState::Sealed(dispatcher) => Ok(Arc::clone(dispatcher)),
            RouterState::Building(_) => Err(RouterError::DispatchWhileMutable),
        }
    }

    pub fn dispatch(&self, req: Request) -> RouterResult<Response> {
        // the lock is released before any handler runs
        let dispatcher = self.dispatcher()?;
        Ok(dispatcher.dispatch(req))
    }

    /// Discards routes, middleware and the sealed dispatcher and reopens registration.
    /// Meant for test isolation.
    pub fn clear(&self) {
        let mut guard = self.inner.write();
        *guard = RouterState::Building(DispatcherBuilder::from_validated(self.options.clone()));
    }
}
