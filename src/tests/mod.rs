//! Test modules for Niihau.
//!
//! This module contains crate-internal test suites that cut across modules:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Snapshot round trips through the prefix index
//! - Shared fixtures and proptest strategies


pub use test_utils::{entries_strategy, TestFixture};
