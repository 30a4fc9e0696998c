//! Output JSON schema definitions for demand reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Source CSV that was ingested
    pub source: String,

    /// Trips counted (rows that passed parsing)
    pub total_trips: u64,

    /// Busiest pickup zones, highest count first
    pub top_zones: Vec<ZoneCount>,

    /// Busiest (zone, hour) slots, highest count first
    pub top_slots: Vec<SlotCount>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Trip count for one pickup zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Trip count for one pickup zone during one hour of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCount {
    pub zone: String,

    /// Hour of day, 0-23
    pub hour: u8,

    pub count: u64,
}

impl ZoneCount {
    pub fn new(zone: impl Into<String>, count: u64) -> Self {
        Self {
            zone: zone.into(),
            count,
        }
    }
}

impl SlotCount {
    pub fn new(zone: impl Into<String>, hour: u8, count: u64) -> Self {
        Self {
            zone: zone.into(),
            hour,
            count,
        }
    }
}
