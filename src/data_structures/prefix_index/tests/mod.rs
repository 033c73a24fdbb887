//! Tests for the prefix index.

mod unit_tests;
