//! Niihau Library
//!
//! This library contains an in-memory prefix index for ranked autocomplete,
//! together with the snapshot format used to persist it and the configuration
//! and error types shared with the `niihau` binary.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_index`]: the trie itself. Pure, in-memory,
//!   single-owner; [`data_structures::SharedPrefixIndex`] adds a read/write
//!   lock for multi-threaded hosts.
//! - [`snapshot`]: CSV `word,score` files, read best-effort and written back
//!   losslessly.
//! - [`config`] and [`error`]: layered configuration and error types.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod snapshot;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
