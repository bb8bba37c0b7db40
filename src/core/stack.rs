//! # Navigation Stack
//!
//! Back-stack for one tab. Strictly LIFO: the only mutations are push, pop,
//! reset (pop-to-root) and wholesale replace. An empty stack is the tab's
//! landing view.
//!
//! The stack records which tab it belongs to but does not police its
//! contents; tab membership is checked by the `Navigator` before anything
//! reaches here.

use crate::core::destination::{Destination, Tab};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationStack {
    tab: Tab,
    entries: Vec<Destination>,
}

impl NavigationStack {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_entries(tab: Tab, entries: Vec<Destination>) -> Self {
        Self { tab, entries }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn push(&mut self, destination: Destination) {
        self.entries.push(destination);
    }

    /// Removes the top entry. Popping at the root is a no-op and returns `None`.
    pub fn pop(&mut self) -> Option<Destination> {
        self.entries.pop()
    }

    /// Pop-to-root.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn replace(&mut self, entries: Vec<Destination>) {
        self.entries = entries;
    }

    pub fn top(&self) -> Option<&Destination> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Destination] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.entries.iter()
    }

    pub(crate) fn to_vec(&self) -> Vec<Destination> {
        self.entries.clone()
    }
}
