// Copyright (c) 2025 Niihau Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Prefix Index Implementation
//!
//! This module provides an in-memory trie that stores scored words and answers
//! ranked autocomplete queries.
//!
//! # Key Features
//!
//! * Case-insensitive storage: every word and prefix is lowercased first
//! * Ranked completion: descending score, ties broken by ascending word
//! * Incremental `word_count`/`node_count` maintained on every mutation
//! * Eager pruning on removal, so no dead leaf chains survive
//!
//! # Complexity
//!
//! | Operation  | Cost                                         |
//! |------------|----------------------------------------------|
//! | `insert`   | O(len(word))                                 |
//! | `remove`   | O(len(word))                                 |
//! | `contains` | O(len(word))                                 |
//! | `complete` | O(len(prefix) + m + k log k), m = subtree    |
//! | `stats`    | O(node_count), because of the height walk    |
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("apple", 5.0);
//! index.insert("App", 9.0);
//! index.insert("apply", 5.0);
//!
//! assert_eq!(index.complete("APP", 2), vec!["app", "apple"]);
//! assert_eq!(index.stats().as_tuple(), (3, 5, 7));
//! ```
//!
//! The index is not synchronized. Wrap it in [`SharedPrefixIndex`] when it
//! has to be reachable from several threads.

mod node;
mod shared;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;

use serde::Serialize;

use node::Node;
pub use shared::SharedPrefixIndex;

/// A single ranked completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    /// The full, normalized word
    pub word: String,

    /// The score stored with the word
    pub score: f64,
}

/// Structural statistics for a [`PrefixIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of stored words
    pub word_count: usize,

    /// Depth of the deepest stored word, in characters
    pub height: usize,

    /// Number of live nodes, including the root
    pub node_count: usize,
}

impl IndexStats {
    /// Returns the statistics as a `(words, height, nodes)` tuple.
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.word_count, self.height, self.node_count)
    }
}

impl From<IndexStats> for (usize, usize, usize) {
    fn from(stats: IndexStats) -> Self {
        stats.as_tuple()
    }
}

/// In-memory trie of scored words.
///
/// The root represents the empty string. It is never removed and counts as one
/// node even when the index is empty.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    /// The root node of the trie
    root: Node,

    /// Number of terminal nodes reachable from the root
    word_count: usize,

    /// Number of live nodes, root included
    node_count: usize,
}

/// Lowercases `word`, borrowing it when it is already lowercase.
fn normalize(word: &str) -> Cow<'_, str> {
    if word.chars().all(|c| c.to_lowercase().eq(std::iter::once(c))) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// Ranking order for completions: higher score first, then lexicographic.
///
/// Adding `0.0` folds `-0.0` into `0.0`, so signed zeros tie.
fn by_rank(a: &Completion, b: &Completion) -> Ordering {
    (b.score + 0.0)
        .total_cmp(&(a.score + 0.0))
        .then_with(|| a.word.cmp(&b.word))
}

/// Collects every stored word in the subtree below `start`.
///
/// Words come out in ascending lexicographic order because children are
/// pushed in reverse character order.
fn collect_words(start: &Node, prefix: &str) -> Vec<Completion> {
    let mut found = Vec::new();
    let mut stack = vec![(start, prefix.to_owned())];

    while let Some((node, path)) = stack.pop() {
        for (&c, child) in node.children.iter().rev() {
            let mut next = String::with_capacity(path.len() + c.len_utf8());
            next.push_str(&path);
            next.push(c);
            stack.push((child, next));
        }
        if node.terminal {
            found.push(Completion {
                word: path,
                score: node.score,
            });
        }
    }

    found
}

/// Removes the word spelled by `chars` below `node` and prunes dead nodes on
/// the way back up. `pruned` counts the nodes that were dropped.
fn detach(node: &mut Node, chars: &[char], pruned: &mut usize) -> bool {
    let Some((first, rest)) = chars.split_first() else {
        return node.unmark();
    };

    let Some(child) = node.children.get_mut(first) else {
        return false;
    };

    if !detach(child, rest, pruned) {
        return false;
    }

    // A prunable child has no children of its own, so dropping it frees
    // exactly one node.
    if child.is_prunable() {
        node.children.remove(first);
        *pruned += 1;
    }

    true
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex` holding only the root node.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Inserts `word` with `score`, overwriting the score if the word exists.
    ///
    /// The empty string is a valid word and marks the root as terminal.
    pub fn insert<W: AsRef<str>>(&mut self, word: W, score: f64) {
        let word = normalize(word.as_ref());

        let mut node = &mut self.root;
        for c in word.chars() {
            node = match node.children.entry(c) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.node_count += 1;
                    entry.insert(Node::new())
                }
            };
        }

        if node.mark(score) {
            self.word_count += 1;
        }
    }

    /// Removes `word` from the index.
    ///
    /// Returns `false` without touching the index if the word is not stored.
    /// Otherwise every node left without children and without a word of its
    /// own is pruned, walking back toward the root.
    pub fn remove<W: AsRef<str>>(&mut self, word: W) -> bool {
        let word = normalize(word.as_ref());
        let chars: Vec<char> = word.chars().collect();

        let mut pruned = 0;
        if !detach(&mut self.root, &chars, &mut pruned) {
            return false;
        }

        self.word_count -= 1;
        self.node_count -= pruned;

        tracing::trace!(word = %word, pruned, "removed word from prefix index");
        true
    }

    /// Returns `true` if `word` is stored in the index.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.find(&normalize(word.as_ref()))
            .map_or(false, |node| node.terminal)
    }

    /// Returns the score stored for `word`, if it is stored.
    pub fn score<W: AsRef<str>>(&self, word: W) -> Option<f64> {
        self.find(&normalize(word.as_ref()))
            .filter(|node| node.terminal)
            .map(|node| node.score)
    }

    /// Returns up to `k` words starting with `prefix`, best first.
    ///
    /// See [`PrefixIndex::complete_scored`] for the ordering rules.
    pub fn complete<P: AsRef<str>>(&self, prefix: P, k: usize) -> Vec<String> {
        self.complete_scored(prefix, k)
            .into_iter()
            .map(|completion| completion.word)
            .collect()
    }

    /// Returns up to `k` completions of `prefix` together with their scores.
    ///
    /// Matches are ordered by descending score; equal scores are ordered by
    /// ascending word. Scores compare with [`f64::total_cmp`], so a positive
    /// NaN ranks above positive infinity; `0.0` and `-0.0` are equal scores. The prefix itself is included when it
    /// is a stored word. An unknown prefix or `k == 0` yields nothing.
    pub fn complete_scored<P: AsRef<str>>(&self, prefix: P, k: usize) -> Vec<Completion> {
        if k == 0 {
            return Vec::new();
        }

        let prefix = normalize(prefix.as_ref());
        let Some(start) = self.find(&prefix) else {
            return Vec::new();
        };

        let mut matches = collect_words(start, &prefix);
        if k < matches.len() {
            matches.select_nth_unstable_by(k - 1, by_rank);
            matches.truncate(k);
        }
        matches.sort_unstable_by(by_rank);
        matches
    }

    /// Returns word count, height, and node count.
    ///
    /// The counts are tracked incrementally, but the height is recomputed by
    /// walking the whole tree. Avoid calling this in a hot loop.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            word_count: self.word_count,
            height: self.height(),
            node_count: self.node_count,
        }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns every stored `(word, score)` pair in ascending word order.
    pub fn entries(&self) -> Vec<(String, f64)> {
        collect_words(&self.root, "")
            .into_iter()
            .map(|completion| (completion.word, completion.score))
            .collect()
    }

    /// Removes every word, leaving only the root.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Walks from the root along `path`.
    fn find(&self, path: &str) -> Option<&Node> {
        path.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// Maximum depth of any terminal node; 0 when nothing deeper than the
    /// root is stored.
    fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if node.terminal {
                max_depth = max_depth.max(depth);
            }
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }

        max_depth
    }

    /// Counts live nodes and dead leaves by walking the tree.
    #[cfg(test)]
    pub(crate) fn audit(&self) -> (usize, usize) {
        let mut nodes = 0;
        let mut dead_leaves = 0;
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            nodes += 1;
            if !std::ptr::eq(node, &self.root) && node.is_prunable() {
                dead_leaves += 1;
            }
            stack.extend(node.children.values());
        }

        (nodes, dead_leaves)
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<(S, f64)> for PrefixIndex {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        for (word, score) in iter {
            self.insert(word, score);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
