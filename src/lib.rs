//! URL-path dispatcher built on a segment trie.
//!
//! Patterns are `/`-separated: literal segments, `:name` variables and a trailing `*`
//! wildcard. Every verb owns a [`trie::PatternTrie`]; a lookup walks it greedily and falls
//! back to the deepest wildcard passed on the way. Matched handlers run behind an ordered
//! [`middleware::MiddlewareChain`].
//!
//! Routes are registered on a [`DispatcherBuilder`] and frozen into a [`Dispatcher`]; the
//! [`Router`] service wraps the same two phases behind a lock for shared use.

pub mod dispatcher;
pub mod enums;
pub mod middleware;
pub mod path;
pub mod pattern;
pub mod response;
pub mod router;
pub mod trie;
pub mod types;

pub use dispatcher::{DispatchError, Dispatcher, DispatcherBuilder, capture, captures};
pub use enums::{HttpMethod, MethodMask};
pub use middleware::{Middleware, MiddlewareChain, middleware_fn};
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use trie::{Captures, MatchKind, PatternTrie, RouteMatch, TrieError};
pub use types::{Handler, Request, Response, handler_fn};
