use super::{Captures, PatternTrie, TrieNode};
use crate::path::tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Every token was consumed and the final node owns a handler.
    Exact,
    /// The walk diverged; the deepest wildcard seen on the way answers.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t, H> {
    pub handler: &'t H,
    pub captures: Captures,
    pub kind: MatchKind,
}

impl<H> PatternTrie<H> {
    /// Finds the handler for `path`.
    ///
    /// The walk is greedy: a literal child wins over the variable child and the walk never
    /// backtracks into a sibling. Each node visited before consuming a token offers its
    /// wildcard as the fallback, the deepest one overwriting earlier ones. When the walk
    /// does not end on a handler the fallback answers with whatever was captured up to the
    /// divergence point, so `/hello/:fname/:lname` plus `/hello/*` matched against
    /// `/hello/john` yields the wildcard handler with `fname = john`.
    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        let mut current: &TrieNode<H> = &self.root;
        let mut captures = Captures::new();
        let mut fallback: Option<&H> = None;
        let mut saw_wildcard = false;
        let mut matched = false;

        for token in tokens(path) {
            if let Some(wildcard) = current.wildcard_child.as_deref() {
                fallback = wildcard.handler.as_ref();
                saw_wildcard = true;
            }

            matched = true;
            if let Some(next) = current.literal_children.get(token) {
                current = next;
            } else if let Some(variable) = current.variable_child.as_deref() {
                captures.insert(&variable.name, token);
                current = variable;
            } else {
                matched = false;
                break;
            }
        }

        if matched && let Some(handler) = current.handler.as_ref() {
            return Some(RouteMatch {
                handler,
                captures,
                kind: MatchKind::Exact,
            });
        }

        if saw_wildcard && let Some(handler) = fallback {
            return Some(RouteMatch {
                handler,
                captures,
                kind: MatchKind::Fallback,
            });
        }

        None
    }
}
