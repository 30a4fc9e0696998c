//! Zone Demand
//!
//! Ingests a CSV file of trip records and reports the busiest pickup
//! zones and the busiest (zone, hour-of-day) slots by trip count.
//!
//! This crate provides the core implementation for the
//! `zone-demand` CLI tool.
//!
//! ## Getting Started
//!
//! ```no_run
//! use zone_demand::TripAggregator;
//!
//! let mut aggregator = TripAggregator::new();
//! aggregator.ingest("trips.csv");
//!
//! let zones = aggregator.top_zones(10);
//! let slots = aggregator.top_busy_slots(10);
//! # let _ = (zones, slots);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use aggregator::{IngestOptions, IngestSummary, SlotKey, TripAggregator};
pub use parser::{SlotCount, ZoneCount};
