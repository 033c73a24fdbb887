// Copyright (c) 2025 Niihau Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit tests for the prefix index.

use test_case::test_case;

use crate::data_structures::prefix_index::{Completion, PrefixIndex};

/// Builds the index used by most ranking tests.
fn fruit_index() -> PrefixIndex {
    let mut index = PrefixIndex::new();
    index.insert("apple", 5.0);
    index.insert("app", 9.0);
    index.insert("apply", 5.0);
    index
}

fn assert_tight(index: &PrefixIndex) {
    let (nodes, dead_leaves) = index.audit();
    assert_eq!(nodes, index.stats().node_count, "node_count drifted");
    assert_eq!(dead_leaves, 0, "dead leaf survived");
}

#[test]
fn test_basic_operations() {
    let mut index = PrefixIndex::new();

    // Initial state
    assert!(index.is_empty());
    assert_eq!(index.stats().as_tuple(), (0, 0, 1));

    index.insert("hello", 1.5);
    assert_eq!(index.len(), 1);
    assert!(index.contains("hello"));
    assert!(!index.contains("hell"));
    assert!(!index.contains("nonexistent"));

    // Case-insensitivity
    assert!(index.contains("HeLLo"));
    assert_eq!(index.score("HELLO"), Some(1.5));

    assert!(index.remove("Hello"));
    assert!(!index.contains("hello"));
    assert!(!index.remove("hello"));
    assert_eq!(index.stats().as_tuple(), (0, 0, 1));
}

#[test]
fn test_reinsert_updates_score_only() {
    let mut index = PrefixIndex::new();
    index.insert("word", 1.0);
    let before = index.stats();

    index.insert("WORD", 7.5);
    assert_eq!(index.stats(), before);
    assert_eq!(index.score("word"), Some(7.5));
}

#[test]
fn test_fruit_scenario() {
    let index = fruit_index();

    assert_eq!(index.complete("app", 2), vec!["app", "apple"]);
    assert_eq!(index.complete("app", 10), vec!["app", "apple", "apply"]);

    // root, a, p, p, l, e, y
    assert_eq!(index.stats().as_tuple(), (3, 5, 7));
    assert_tight(&index);
}

#[test_case("APP", 2, &["app", "apple"] ; "uppercase prefix")]
#[test_case("appl", 5, &["apple", "apply"] ; "prefix is not a word")]
#[test_case("apple", 5, &["apple"] ; "prefix is itself a word")]
#[test_case("b", 5, &[] ; "unknown prefix")]
#[test_case("apples", 5, &[] ; "prefix longer than any word")]
#[test_case("app", 0, &[] ; "zero limit")]
#[test_case("", 1, &["app"] ; "empty prefix ranks whole index")]
fn test_complete_cases(prefix: &str, k: usize, expected: &[&str]) {
    assert_eq!(fruit_index().complete(prefix, k), expected);
}

#[test]
fn test_complete_scored_carries_scores() {
    let index = fruit_index();
    assert_eq!(
        index.complete_scored("app", 3),
        vec![
            Completion { word: "app".to_string(), score: 9.0 },
            Completion { word: "apple".to_string(), score: 5.0 },
            Completion { word: "apply".to_string(), score: 5.0 },
        ]
    );
}

#[test]
fn test_complete_negative_and_tied_scores() {
    let mut index = PrefixIndex::new();
    index.insert("cab", -1.0);
    index.insert("car", 0.0);
    index.insert("cat", 0.0);
    index.insert("cow", -0.5);

    assert_eq!(index.complete("c", 4), vec!["car", "cat", "cow", "cab"]);
    assert_eq!(index.complete("c", 3), vec!["car", "cat", "cow"]);
}

#[test]
fn test_signed_zero_scores_tie() {
    let mut index = PrefixIndex::new();
    index.insert("b", 0.0);
    index.insert("a", -0.0);
    index.insert("c", -0.0);

    assert_eq!(index.complete("", 3), vec!["a", "b", "c"]);
    assert_eq!(index.complete("", 2), vec!["a", "b"]);
}

#[test]
fn test_nan_scores_are_ordered() {
    let mut index = PrefixIndex::new();
    index.insert("nan", f64::NAN);
    index.insert("inf", f64::INFINITY);
    index.insert("one", 1.0);

    assert_eq!(index.complete("", 3), vec!["nan", "inf", "one"]);
    assert!(index.score("nan").is_some_and(f64::is_nan));
}

#[test]
fn test_remove_prunes_dead_chain() {
    let mut index = PrefixIndex::new();
    index.insert("car", 1.0);
    index.insert("carpet", 2.0);
    assert_eq!(index.stats().node_count, 7);

    assert!(index.remove("carpet"));
    // "pet" is gone, "car" survives
    assert_eq!(index.stats().as_tuple(), (1, 3, 4));
    assert!(index.contains("car"));
    assert_tight(&index);
}

#[test]
fn test_remove_keeps_shared_branch() {
    let mut index = fruit_index();

    assert!(index.remove("apple"));
    assert_eq!(index.stats().as_tuple(), (2, 5, 6));
    assert_eq!(index.complete("app", 5), vec!["app", "apply"]);
    assert_tight(&index);

    assert!(index.remove("apply"));
    assert_eq!(index.stats().as_tuple(), (1, 3, 4));
    assert_tight(&index);
}

#[test]
fn test_remove_interior_word_keeps_children() {
    let mut index = fruit_index();

    assert!(index.remove("app"));
    assert!(!index.contains("app"));
    assert!(index.contains("apple"));
    assert_eq!(index.stats().as_tuple(), (2, 5, 7));
    assert_eq!(index.score("app"), None);
}

#[test]
fn test_remove_missing_word_is_noop() {
    let mut index = fruit_index();
    let before = index.stats();

    assert!(!index.remove("ap"));
    assert!(!index.remove("apples"));
    assert!(!index.remove("banana"));
    assert!(!index.remove(""));
    assert_eq!(index.stats(), before);
}

#[test]
fn test_empty_index_has_zero_height() {
    let index = PrefixIndex::new();
    assert_eq!(index.stats().as_tuple(), (0, 0, 1));
    assert!(index.complete("", 10).is_empty());
    assert!(!index.contains(""));
}

#[test]
fn test_empty_string_is_a_word() {
    let mut index = PrefixIndex::new();
    index.insert("", 3.0);

    // Height stays 0, but the word count tells the two cases apart.
    assert_eq!(index.stats().as_tuple(), (1, 0, 1));
    assert!(index.contains(""));
    assert_eq!(index.complete("", 5), vec![""]);

    index.insert("a", 1.0);
    assert_eq!(index.complete("", 5), vec!["", "a"]);

    assert!(index.remove(""));
    assert_eq!(index.stats().as_tuple(), (1, 1, 2));
    assert!(index.remove("a"));
    assert_eq!(index.stats().as_tuple(), (0, 0, 1));
}

#[test]
fn test_unicode_words() {
    let mut index = PrefixIndex::new();
    index.insert("Ärger", 2.0);
    index.insert("ärmel", 1.0);
    index.insert("日本", 4.0);

    assert_eq!(index.complete("ÄR", 5), vec!["ärger", "ärmel"]);
    assert!(index.contains("日本"));
    assert_eq!(index.stats().height, 5);
    assert_tight(&index);
}

#[test]
fn test_entries_are_sorted() {
    let mut index = fruit_index();
    index.insert("banana", 1.0);
    index.insert("", 0.5);

    let words: Vec<String> = index.entries().into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["", "app", "apple", "apply", "banana"]);
}

#[test]
fn test_collect_and_clear() {
    let mut index: PrefixIndex = vec![("One", 1.0), ("two", 2.0)].into_iter().collect();
    assert_eq!(index.len(), 2);
    assert!(index.contains("one"));

    index.extend([("three".to_string(), 3.0)]);
    assert_eq!(index.complete("t", 5), vec!["three", "two"]);

    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.stats().as_tuple(), (0, 0, 1));
}
