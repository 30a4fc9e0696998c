//! Aggregation of trip rows into zone and slot tallies.
//!
//! This module turns a trip CSV file into:
//! - Per-zone trip counts
//! - Per-(zone, hour) trip counts
//! - Ranked top-K views over both

pub mod ranking;
pub mod tally;

// Re-export main types and functions
pub use ranking::{rank_slots, rank_zones};
pub use tally::{IngestOptions, IngestSummary, SlotKey, TripAggregator};
