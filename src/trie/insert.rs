use super::{PatternTrie, TrieError, TrieNode, TrieResult};
use crate::pattern::{Token, parse_pattern};

impl<H> PatternTrie<H> {
    /// Registers `handler` under `pattern`.
    ///
    /// Fails when the wildcard is not the last segment, when a different variable name
    /// already occupies the same level, or when the pattern already owns a handler. A
    /// failed registration may leave empty intermediate nodes behind; they carry no
    /// handler and never produce a match.
    pub fn register(&mut self, pattern: &str, handler: H) -> TrieResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "register", pattern = %pattern);

        let parsed = parse_pattern(pattern)?;
        let mut current = &mut self.root;

        for token in parsed {
            current = match token {
                Token::Literal(literal) => current.descend_literal_mut(literal),
                Token::Variable(name) => descend_variable_mut(current, name, pattern)?,
                Token::Wildcard => current.descend_wildcard_mut(),
            };
        }

        if current.handler.is_some() {
            return Err(TrieError::DuplicateHandler {
                pattern: pattern.to_string(),
            });
        }

        current.handler = Some(handler);
        self.handlers += 1;

        Ok(())
    }
}

fn descend_variable_mut<'a, H>(
    node: &'a mut TrieNode<H>,
    name: &str,
    pattern: &str,
) -> TrieResult<&'a mut TrieNode<H>> {
    match node.variable_child {
        Some(ref existing) if existing.name.as_ref() != name => {
            Err(TrieError::ConflictingVariable {
                pattern: pattern.to_string(),
                existing: existing.name.to_string(),
                requested: name.to_string(),
            })
        }
        _ => Ok(node
            .variable_child
            .get_or_insert_with(|| Box::new(TrieNode::new(name)))
            .as_mut()),
    }
}
