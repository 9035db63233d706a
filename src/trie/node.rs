use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

pub(crate) const ROOT_NAME: &str = "#ROOT#";

pub(super) type LiteralMap<H> = FastHashMap<Box<str>, TrieNode<H>>;

#[derive(Debug)]
pub struct TrieNode<H> {
    // literal token, or the variable name without its marker
    pub(crate) name: Arc<str>,
    pub(crate) literal_children: LiteralMap<H>,
    pub(crate) variable_child: Option<Box<TrieNode<H>>>,
    pub(crate) wildcard_child: Option<Box<TrieNode<H>>>,
    pub(crate) handler: Option<H>,
}

impl<H> TrieNode<H> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            literal_children: FastHashMap::new(),
            variable_child: None,
            wildcard_child: None,
            handler: None,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    #[inline]
    pub(super) fn is_leaf(&self) -> bool {
        self.literal_children.is_empty()
            && self.variable_child.is_none()
            && self.wildcard_child.is_none()
    }

    pub(super) fn descend_literal_mut(&mut self, token: &str) -> &mut TrieNode<H> {
        // entry_ref only allocates the boxed key on a miss
        self.literal_children
            .entry_ref(token)
            .or_insert_with(|| TrieNode::new(token))
    }

    pub(super) fn descend_wildcard_mut(&mut self) -> &mut TrieNode<H> {
        self.wildcard_child
            .get_or_insert_with(|| Box::new(TrieNode::new(crate::pattern::WILDCARD)))
            .as_mut()
    }
}
