//! Synthetic word lists for seeding snapshots and benchmarks.

/// Score given to every synthetic word.
const SYNTHETIC_SCORE: f64 = 1.0;

/// Yields `count` pairs `("word00001", 1.0)`, `("word00002", 1.0)`, ...
///
/// Numbers are zero-padded to five digits, wider only when `count` needs it.
pub fn synthetic_wordlist(count: usize) -> impl Iterator<Item = (String, f64)> {
    (1..=count).map(|i| (format!("word{i:05}"), SYNTHETIC_SCORE))
}
