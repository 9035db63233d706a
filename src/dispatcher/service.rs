use http::StatusCode;
use std::sync::Arc;

use super::DispatchError;
use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodMask};
use crate::path::decode_percent;
use crate::response::error_response;
use crate::router::RouterOptions;
use crate::trie::{MatchKind, PatternTrie, RouteMatch};
use crate::types::{Handler, Request, Response};

pub(super) struct RouteTable {
    pub(super) tries: [Option<PatternTrie<Handler>>; HTTP_METHOD_COUNT],
    pub(super) registered: MethodMask,
    pub(super) not_found: Option<Handler>,
    pub(super) options: RouterOptions,
}

impl RouteTable {
    fn resolve(
        &self,
        method: &http::Method,
        path: &str,
    ) -> Result<RouteMatch<'_, Handler>, DispatchError> {
        let verb = HttpMethod::from_http(method).ok_or_else(|| {
            DispatchError::MethodNotSupported {
                method: method.as_str().to_string(),
            }
        })?;

        let trie = self.tries[verb.index()]
            .as_ref()
            .ok_or(DispatchError::MethodNotRegistered { method: verb })?;

        let decoded = decode_percent(path)?;
        trie.find(&decoded).ok_or_else(|| DispatchError::NotFound {
            method: verb,
            path: path.to_string(),
        })
    }

    /// Terminal of every composed chain.
    pub(super) fn route(&self, mut req: Request) -> Response {
        let outcome = self.resolve(req.method(), req.uri().path());

        match outcome {
            Ok(RouteMatch {
                handler,
                captures,
                kind,
            }) => {
                if self.options.debug {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        method = %req.method(),
                        path = %req.uri().path(),
                        fallback = kind == MatchKind::Fallback,
                        captures = captures.len() as u64,
                        "route matched"
                    );
                }
                if !captures.is_empty() {
                    req.extensions_mut().insert(captures);
                }
                handler(req)
            }
            Err(err) => {
                if self.options.debug {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        method = %req.method(),
                        path = %req.uri().path(),
                        reason = %err,
                        "route not matched"
                    );
                }
                self.reject(err, req)
            }
        }
    }

    fn reject(&self, err: DispatchError, req: Request) -> Response {
        match err {
            DispatchError::MethodNotSupported { .. } => error_response(
                StatusCode::NOT_FOUND,
                &self.options.method_not_supported_message,
            ),
            DispatchError::MethodNotRegistered { .. } => error_response(
                StatusCode::NOT_FOUND,
                &self.options.method_not_registered_message,
            ),
            // an undecodable path cannot name any route
            DispatchError::NotFound { .. } | DispatchError::MalformedPath(_) => {
                match self.not_found.as_ref() {
                    Some(handler) => handler(req),
                    None => {
                        error_response(StatusCode::NOT_FOUND, &self.options.not_found_message)
                    }
                }
            }
        }
    }
}

/// Frozen dispatcher: per-verb tries plus the composed middleware chain.
///
/// Nothing here mutates after [`super::DispatcherBuilder::build`], so one instance (or an
/// `Arc` of it) serves any number of concurrent requests without locking.
#[derive(Clone)]
pub struct Dispatcher {
    table: Arc<RouteTable>,
    entry: Handler,
    middlewares: usize,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("methods", &self.table.registered)
            .field("middlewares", &self.middlewares)
            .field("custom_not_found", &self.table.not_found.is_some())
            .field("options", &self.table.options)
            .finish()
    }
}

impl Dispatcher {
    pub(super) fn new(table: Arc<RouteTable>, entry: Handler, middlewares: usize) -> Self {
        Self {
            table,
            entry,
            middlewares,
        }
    }

    pub fn builder() -> super::DispatcherBuilder {
        super::DispatcherBuilder::new()
    }

    /// Runs `req` through the middleware chain and the matching handler. Every routing
    /// failure becomes a response; this never panics on unknown input.
    pub fn dispatch(&self, req: Request) -> Response {
        (self.entry)(req)
    }

    /// Resolves a route without invoking the chain or any handler. `path` is the raw
    /// request path; escapes are decoded before matching.
    pub fn resolve(
        &self,
        method: &http::Method,
        path: &str,
    ) -> Result<RouteMatch<'_, Handler>, DispatchError> {
        self.table.resolve(method, path)
    }

    pub fn registered_methods(&self) -> MethodMask {
        self.table.registered
    }

    pub fn trie(&self, method: HttpMethod) -> Option<&PatternTrie<Handler>> {
        self.table.tries[method.index()].as_ref()
    }

    pub fn middleware_count(&self) -> usize {
        self.middlewares
    }

    pub fn options(&self) -> &RouterOptions {
        &self.table.options
    }

    /// The composed chain as a plain handler, e.g. for mounting into a host server.
    pub fn handler(&self) -> Handler {
        Arc::clone(&self.entry)
    }
}
