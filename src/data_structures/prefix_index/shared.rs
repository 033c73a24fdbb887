//! Thread-safe handle around a [`PrefixIndex`].
//!
//! Reads (`contains`, `complete`, `score`, `stats`) share a read lock and may
//! run concurrently. Mutations take the write lock for the whole operation,
//! so every call is still atomic.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Completion, IndexStats, PrefixIndex};

/// Cloneable, lock-protected prefix index.
///
/// Clones share the same underlying index.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<RwLock<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Creates a new, empty shared index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing index.
    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// See [`PrefixIndex::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W, score: f64) {
        self.inner.write().insert(word, score);
    }

    /// See [`PrefixIndex::remove`].
    pub fn remove<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().remove(word)
    }

    /// See [`PrefixIndex::contains`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// See [`PrefixIndex::score`].
    pub fn score<W: AsRef<str>>(&self, word: W) -> Option<f64> {
        self.inner.read().score(word)
    }

    /// See [`PrefixIndex::complete`].
    pub fn complete<P: AsRef<str>>(&self, prefix: P, k: usize) -> Vec<String> {
        self.inner.read().complete(prefix, k)
    }

    /// See [`PrefixIndex::complete_scored`].
    pub fn complete_scored<P: AsRef<str>>(&self, prefix: P, k: usize) -> Vec<Completion> {
        self.inner.read().complete_scored(prefix, k)
    }

    /// See [`PrefixIndex::stats`]. Holds the read lock for the full walk.
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// See [`PrefixIndex::clear`].
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns a copy of the current index contents.
    pub fn snapshot(&self) -> PrefixIndex {
        self.inner.read().clone()
    }
}

impl From<PrefixIndex> for SharedPrefixIndex {
    fn from(index: PrefixIndex) -> Self {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let index = SharedPrefixIndex::new();
        index.insert("Hello", 1.0);

        let other = index.clone();
        assert!(other.contains("hello"));
        assert_eq!(other.score("HELLO"), Some(1.0));

        assert!(other.remove("hello"));
        assert!(!index.contains("hello"));
        assert_eq!(index.stats().as_tuple(), (0, 0, 1));
    }

    /// Several writers insert disjoint keys while readers run completions.
    #[test]
    fn test_shared_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;
        const TOTAL_KEYS: usize = THREAD_COUNT * OPS_PER_THREAD;

        let index = SharedPrefixIndex::new();
        let start_barrier = Arc::new(Barrier::new(THREAD_COUNT * 2));
        let completed = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::with_capacity(THREAD_COUNT * 2);
        for thread_id in 0..THREAD_COUNT {
            let writer = index.clone();
            let barrier = Arc::clone(&start_barrier);
            let counter = Arc::clone(&completed);
            handles.push(thread::spawn(move || {
                barrier.wait();
                for j in 0..OPS_PER_THREAD {
                    writer.insert(format!("key_{thread_id}_{j}"), j as f64);
                }
                counter.fetch_add(1, Ordering::SeqCst);
            }));

            let reader = index.clone();
            let barrier = Arc::clone(&start_barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                for _ in 0..OPS_PER_THREAD {
                    let results = reader.complete("key_", 5);
                    assert!(results.len() <= 5);
                    assert!(results.iter().all(|w| w.starts_with("key_")));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(completed.load(Ordering::SeqCst), THREAD_COUNT);
        assert_eq!(index.stats().word_count, TOTAL_KEYS);

        // Remove half the keys, then check the counts settled.
        let remover = index.clone();
        thread::spawn(move || {
            for thread_id in (0..THREAD_COUNT).step_by(2) {
                for j in 0..OPS_PER_THREAD {
                    assert!(remover.remove(format!("key_{thread_id}_{j}")));
                }
            }
        })
        .join()
        .expect("remover thread panicked");

        let snapshot = index.snapshot();
        assert_eq!(snapshot.len(), TOTAL_KEYS / 2);
        let (nodes, dead_leaves) = snapshot.audit();
        assert_eq!(nodes, snapshot.stats().node_count);
        assert_eq!(dead_leaves, 0);
    }
}
