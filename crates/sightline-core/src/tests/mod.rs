//! Whole-engine tests.
//!
//! - `scenarios.rs`: turn-level behaviour on hand-built layouts
//! - `history.rs`: match runs, snapshots and serialization
//! - `helpers.rs`: shared setup

mod helpers;
