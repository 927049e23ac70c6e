//! Wearcheck End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the budget resolver, the
//! rule engine and the CLI command layer:
//!
//! - Validation: statistics + selection -> report
//! - Determinism: identical inputs produce byte-identical JSON reports
//! - Properties: budget and severity invariants over arbitrary selections
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wearcheck-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{clean_stats, StatsFixture};
