//! Node implementation for the prefix index.
//!
//! Nodes are the building blocks of the trie. Each node exclusively owns its
//! children, so dropping a node releases the whole subtree below it.

use std::collections::BTreeMap;

/// A node in the prefix index.
///
/// Each node represents one character on a path from the root. Terminal nodes
/// mark the end of a stored word and carry its score.
#[derive(Debug, Default, Clone)]
pub(crate) struct Node {
    /// Child nodes keyed by character, kept in character order
    pub(crate) children: BTreeMap<char, Node>,

    /// Whether the path to this node spells a stored word
    pub(crate) terminal: bool,

    /// Score of the stored word; 0.0 unless `terminal`
    pub(crate) score: f64,
}

impl Node {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A node that marks no word and leads nowhere.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Marks this node as a stored word with `score`.
    ///
    /// Returns `true` if the node was not terminal before.
    pub(crate) fn mark(&mut self, score: f64) -> bool {
        let is_new = !self.terminal;
        self.terminal = true;
        self.score = score;
        is_new
    }

    /// Clears the word marker and resets the score.
    ///
    /// Returns `true` if the node was terminal before.
    pub(crate) fn unmark(&mut self) -> bool {
        if !self.terminal {
            return false;
        }
        self.terminal = false;
        self.score = 0.0;
        true
    }
}
