//! Configuration and constants for ingestion and reporting.

/// Default number of entries returned by the ranking queries
pub const DEFAULT_TOP_K: usize = 10;

/// Upper bound accepted by the CLI for `--top-zones` / `--top-slots`
pub const MAX_TOP_K: usize = 10_000;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Row shape: the first five fields end at the first five commas,
// the sixth absorbs everything after the fifth comma.
pub const FIELD_COUNT: usize = 6;
pub const COMPACT_FIELD_COUNT: usize = 3;

pub const TRIP_ID_COLUMN: usize = 0;
pub const ZONE_COLUMN: usize = 1;
pub const TIMESTAMP_COLUMN: usize = 3;
pub const COMPACT_TIMESTAMP_COLUMN: usize = 2;

// Header markers (exact match after trimming)
pub const TRIP_ID_HEADER: &str = "TripID";
pub const ZONE_HEADER: &str = "PickupZoneID";
pub const TIMESTAMP_HEADER: &str = "PickupDateTime";

/// Hours of the day are 0..=23, no timezone semantics
pub const MAX_HOUR: u32 = 23;
