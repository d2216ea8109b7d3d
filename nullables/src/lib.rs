//! Nullable infrastructure for deterministic testing.
//!
//! Components only talk to the outside world through the selection sink and
//! the datasets they are handed. This crate provides test-friendly versions
//! of both:
//! - [`NullSelectionSink`] records every sink call in order
//! - [`fixtures`] builds reproducible balances and delegate rosters
//!
//! Usage: hand a `NullSelectionSink` to a component instead of the dashboard's
//! real selection, then assert on the recorded calls.

pub mod fixtures;
pub mod sink;

pub use sink::{NullSelectionSink, SinkCall};
