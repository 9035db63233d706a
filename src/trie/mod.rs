//! Segment trie: route registration and longest-match lookup with wildcard fallback.

mod captures;
mod error;
mod insert;
mod lookup;
mod node;
mod traversal;

pub use captures::{CapturedValue, Captures, INLINE_CAPTURES};
pub use error::{TrieError, TrieResult};
pub use lookup::{MatchKind, RouteMatch};
pub use node::TrieNode;

/// Route tree for a single verb.
///
/// Mutated only through [`PatternTrie::register`] while the application boots; lookups
/// take `&self` and never touch the tree, so a built trie can be shared freely.
#[derive(Debug)]
pub struct PatternTrie<H> {
    pub(crate) root: TrieNode<H>,
    handlers: usize,
}

impl<H> Default for PatternTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> PatternTrie<H> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            handlers: 0,
        }
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.handlers
    }

    pub fn is_empty(&self) -> bool {
        self.handlers == 0
    }

    /// Drops every route and resets the tree to an empty root.
    pub fn clear(&mut self) {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "clear",
            routes = self.handlers as u64
        );
        self.root = TrieNode::root();
        self.handlers = 0;
    }

    pub fn root(&self) -> &TrieNode<H> {
        &self.root
    }

    /// Depth of the deepest node; the root counts as zero.
    pub fn depth(&self) -> usize {
        traversal::max_depth(&self.root)
    }
}
