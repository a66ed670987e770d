use std::collections::HashSet;

use super::types::SectionKey;

/// The set of collapsed sections. Everything starts expanded.
///
/// Membership is the single source of truth for every row count and index
/// computation. No operation fails: keys are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: HashSet<SectionKey>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, key: SectionKey) -> bool {
        self.collapsed.contains(&key)
    }

    /// Marks `key` collapsed. Returns false if it already was.
    pub fn collapse(&mut self, key: SectionKey) -> bool {
        self.collapsed.insert(key)
    }

    /// Marks `key` expanded. Returns false if it already was.
    pub fn expand(&mut self, key: SectionKey) -> bool {
        self.collapsed.remove(&key)
    }

    pub fn all_collapsed_keys(&self) -> &HashSet<SectionKey> {
        &self.collapsed
    }

    /// Collapsed keys in ascending `(section, subsection)` order.
    pub fn sorted_keys(&self) -> Vec<SectionKey> {
        let mut keys: Vec<SectionKey> = self.collapsed.iter().copied().collect();
        keys.sort();
        keys
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&SectionKey) -> bool,
    {
        self.collapsed.retain(f);
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}
