use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

pub const INLINE_CAPTURES: usize = 4;

pub type CapturedValue = (Arc<str>, String);

/// Variable values captured while walking the trie, in trie depth order.
///
/// Names are shared with the trie nodes; values are owned so every request gets an
/// independent instance. A name captured twice keeps its first position and takes the
/// deeper value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    entries: SmallVec<[CapturedValue; INLINE_CAPTURES]>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &Arc<str>, value: &str) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.as_ref() == name.as_ref())
        {
            slot.1.clear();
            slot.1.push_str(value);
            return;
        }
        self.entries.push((Arc::clone(name), value.to_owned()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}
