//! Line parsing and schema definitions.
//!
//! This module handles:
//! - Splitting raw CSV lines into fixed-arity fields
//! - Detecting header rows
//! - Extracting the hour of day from pickup timestamps
//! - Defining output schema

pub mod hour;
pub mod line;
pub mod schema;

// Re-export main types
pub use hour::parse_hour;
pub use line::{comma_count, is_header, split_compact_fields, split_fields, trim_field};
pub use schema::{DemandReport, SlotCount, ZoneCount};
