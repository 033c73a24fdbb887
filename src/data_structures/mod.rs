//! Data structures for Niihau.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict parent-to-child ownership, no shared or cyclic nodes
//! - Counters maintained at mutation time rather than recomputed on read

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{Completion, IndexStats, PrefixIndex, SharedPrefixIndex};
