//! Validated navigation configuration handed to the site renderer.

use std::collections::HashSet;

use serde::Serialize;

use crate::node::{LinkNode, NavNode};

/// Site title and sidebar tree.
///
/// Produced only by [`build`](crate::build), so every instance satisfies the
/// label and link invariants. There is no way to mutate it afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationConfig {
    title: String,
    sidebar: Vec<NavNode>,
}

impl NavigationConfig {
    pub(crate) fn new(title: String, sidebar: Vec<NavNode>) -> Self {
        Self { title, sidebar }
    }

    /// Site display name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-level entries in render order.
    #[must_use]
    pub fn sidebar(&self) -> &[NavNode] {
        &self.sidebar
    }

    /// Total number of entries, groups included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.sidebar.iter().map(NavNode::node_count).sum()
    }

    /// Maximum nesting depth (0 for an empty sidebar).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.sidebar.iter().map(NavNode::depth).max().unwrap_or(0)
    }

    /// Every link entry, depth-first in render order.
    pub fn links(&self) -> Links<'_> {
        Links {
            stack: vec![self.sidebar.iter()],
        }
    }

    /// First link entry pointing at `target`.
    #[must_use]
    pub fn find_link(&self, target: &str) -> Option<&LinkNode> {
        self.links().find(|link| link.link() == target)
    }

    /// Link targets referenced by more than one entry, in first-seen order.
    #[must_use]
    pub fn duplicate_links(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for link in self.links() {
            let target = link.link();
            if !seen.insert(target) && reported.insert(target) {
                duplicates.push(target);
            }
        }
        duplicates
    }
}

/// Pre-order iterator over the link entries of a [`NavigationConfig`].
///
/// Keeps one slice iterator per open group, so memory is bounded by the tree depth.
#[derive(Debug)]
pub struct Links<'a> {
    stack: Vec<std::slice::Iter<'a, NavNode>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a LinkNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(NavNode::Link(link)) => return Some(link),
                Some(NavNode::Group(group)) => self.stack.push(group.items().iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
