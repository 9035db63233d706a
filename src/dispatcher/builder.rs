use std::sync::Arc;

use super::Dispatcher;
use super::service::RouteTable;
use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodMask};
use crate::middleware::{Middleware, MiddlewareChain};
use crate::path::join_segments;
use crate::router::{RouterOptions, RouterResult, validate_prefix};
use crate::trie::PatternTrie;
use crate::types::{Handler, Request};

/// Bootstrap half of the dispatcher: every mutation happens here, through `&mut self`,
/// before [`DispatcherBuilder::build`] freezes the routes into a [`Dispatcher`].
///
/// Registration errors are configuration bugs; callers are expected to abort startup on
/// the first one.
pub struct DispatcherBuilder {
    tries: [Option<PatternTrie<Handler>>; HTTP_METHOD_COUNT],
    chain: MiddlewareChain,
    prefixes: Vec<String>,
    not_found: Option<Handler>,
    options: RouterOptions,
}

impl std::fmt::Debug for DispatcherBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatcherBuilder")
            .field("methods", &self.registered_methods())
            .field("chain", &self.chain)
            .field("prefixes", &self.prefixes)
            .field("custom_not_found", &self.not_found.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::from_validated(RouterOptions::default())
    }

    /// Fails when `options` carries a dynamic or relative default prefix or a blank
    /// message, whichever way the options were assembled.
    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        if let Err(err) = options.validate() {
            tracing::event!(
                tracing::Level::ERROR,
                error = %err,
                "rejected dispatcher options"
            );
            return Err(err.into());
        }
        Ok(Self::from_validated(options))
    }

    pub(crate) fn from_validated(options: RouterOptions) -> Self {
        Self {
            tries: Default::default(),
            chain: MiddlewareChain::new(),
            prefixes: Vec::new(),
            not_found: None,
            options,
        }
    }

    pub fn router_options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn route(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        handler: Handler,
    ) -> RouterResult<&mut Self> {
        let full_pattern = self.prefixed(pattern);
        tracing::event!(
            tracing::Level::TRACE,
            operation = "route",
            method = %method,
            pattern = %full_pattern
        );

        let trie = self.tries[method.index()].get_or_insert_with(PatternTrie::new);
        if let Err(err) = trie.register(&full_pattern, handler) {
            tracing::event!(
                tracing::Level::ERROR,
                method = %method,
                pattern = %full_pattern,
                error = %err,
                "route registration failed"
            );
            return Err(err.into());
        }
        Ok(self)
    }

    pub fn get(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Get, pattern, handler)
    }

    pub fn put(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Put, pattern, handler)
    }

    pub fn post(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Post, pattern, handler)
    }

    pub fn delete(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Delete, pattern, handler)
    }

    pub fn patch(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Patch, pattern, handler)
    }

    pub fn head(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Head, pattern, handler)
    }

    pub fn options(&mut self, pattern: &str, handler: Handler) -> RouterResult<&mut Self> {
        self.route(HttpMethod::Options, pattern, handler)
    }

    /// Prefixes every route registered from now on. Routes registered earlier keep their
    /// pattern.
    pub fn with_default_prefix(&mut self, prefix: &str) -> RouterResult<&mut Self> {
        validate_prefix(prefix)?;
        self.prefixes.push(prefix.to_string());
        Ok(self)
    }

    /// Prefixes only the routes registered inside `scope`.
    pub fn with_prefix<F>(&mut self, prefix: &str, scope: F) -> RouterResult<&mut Self>
    where
        F: FnOnce(&mut Self) -> RouterResult<()>,
    {
        validate_prefix(prefix)?;
        self.prefixes.push(prefix.to_string());
        let outcome = scope(self);
        self.prefixes.pop();
        outcome.map(|()| self)
    }

    pub fn not_found(&mut self, handler: Handler) -> &mut Self {
        self.not_found = Some(handler);
        self
    }

    pub fn attach(&mut self, middleware: Middleware) -> &mut Self {
        self.chain.attach(middleware);
        self
    }

    pub fn attach_all<I>(&mut self, middlewares: I) -> &mut Self
    where
        I: IntoIterator<Item = Middleware>,
    {
        self.chain.attach_all(middlewares);
        self
    }

    /// Drops every per-verb trie. Middleware, prefixes and the not-found handler stay.
    pub fn clear(&mut self) {
        tracing::event!(tracing::Level::TRACE, operation = "clear");
        self.tries = Default::default();
    }

    pub fn registered_methods(&self) -> MethodMask {
        HttpMethod::ALL
            .into_iter()
            .filter(|method| self.tries[method.index()].is_some())
            .fold(MethodMask::empty(), |mask, method| mask | method.mask())
    }

    pub fn build(self) -> Dispatcher {
        let registered = self.registered_methods();
        let table = Arc::new(RouteTable {
            tries: self.tries,
            registered,
            not_found: self.not_found,
            options: self.options,
        });

        let routing = Arc::clone(&table);
        let terminal: Handler = Arc::new(move |req: Request| routing.route(req));
        let entry = self.chain.compose(terminal);

        tracing::event!(
            tracing::Level::DEBUG,
            methods = ?registered,
            middlewares = self.chain.len() as u64,
            "dispatcher built"
        );

        Dispatcher::new(table, entry, self.chain.len())
    }

    fn prefixed(&self, pattern: &str) -> String {
        join_segments(
            self.options
                .default_prefix
                .as_deref()
                .into_iter()
                .chain(self.prefixes.iter().map(String::as_str))
                .chain(std::iter::once(pattern)),
        )
    }
}
