//! Zone and slot tallies built from a trip CSV file.
//!
//! Ingestion is a best-effort linear pass: a line that fails to parse is
//! skipped and counted, never fatal. An unopenable source leaves both
//! tallies empty.
//!
//! Zones are keyed on their raw source bytes, so two identifiers that differ
//! only in invalid UTF-8 stay distinct.

use super::ranking::{rank_slots, rank_zones};
use crate::parser::line::{comma_count, is_header, split_compact_fields, split_fields};
use crate::parser::parse_hour;
use crate::parser::schema::{DemandReport, SlotCount, ZoneCount};
use crate::utils::config::{
    COMPACT_FIELD_COUNT, COMPACT_TIMESTAMP_COLUMN, REPORT_SCHEMA_VERSION, TIMESTAMP_COLUMN,
    ZONE_COLUMN,
};
use crate::utils::error::LineError;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Composite key for the slot tally
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub zone: Vec<u8>,
    pub hour: u8,
}

impl SlotKey {
    pub fn new(zone: impl Into<Vec<u8>>, hour: u8) -> Self {
        Self {
            zone: zone.into(),
            hour,
        }
    }
}

/// Ingestion behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Also accept `TripID,PickupZoneID,PickupDateTime` lines (exactly two commas)
    pub compact_rows: bool,
}

/// What happened during the last ingestion pass
///
/// When the source opened, `lines_read == rows_counted + header_rows + rows_skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub source_opened: bool,
    pub lines_read: u64,
    pub rows_counted: u64,
    pub header_rows: u64,
    pub rows_skipped: u64,
}

impl IngestSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Counted: {} | Headers: {} | Skipped: {}",
            self.lines_read, self.rows_counted, self.header_rows, self.rows_skipped
        )
    }
}

/// One successfully classified line
#[derive(Debug, PartialEq, Eq)]
enum Row<'a> {
    Header,
    Trip { zone: &'a [u8], hour: u8 },
}

/// Owns the zone and slot tallies and answers ranking queries
///
/// **Public** - main entry point of the library
///
/// # Example
/// ```no_run
/// use zone_demand::TripAggregator;
///
/// let mut aggregator = TripAggregator::new();
/// aggregator.ingest("trips.csv");
///
/// for entry in aggregator.top_zones(10) {
///     println!("{} {}", entry.zone, entry.count);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripAggregator {
    options: IngestOptions,
    zone_counts: HashMap<Vec<u8>, u64>,
    slot_counts: HashMap<SlotKey, u64>,
    last_summary: IngestSummary,
}

impl TripAggregator {
    /// Create an empty aggregator with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty aggregator with the given options
    pub fn with_options(options: IngestOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Ingest a CSV file, replacing any previous tallies
    ///
    /// **Public** - never fails. A missing or unreadable file leaves both
    /// tallies empty; the returned summary reports `source_opened: false`.
    pub fn ingest(&mut self, source: impl AsRef<Path>) -> IngestSummary {
        let source = source.as_ref();
        self.reset();

        match File::open(source) {
            Ok(file) => {
                debug!("Ingesting trips from: {}", source.display());
                self.ingest_reader(BufReader::new(file))
            }
            Err(e) => {
                warn!("Cannot open {}: {}", source.display(), e);
                self.last_summary
            }
        }
    }

    /// Ingest from any buffered byte stream, replacing any previous tallies
    ///
    /// **Public** - same per-line semantics as `ingest`
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> IngestSummary {
        self.reset();

        let mut summary = IngestSummary {
            source_opened: true,
            ..IngestSummary::default()
        };
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("Read error after {} lines, stopping: {}", summary.lines_read, e);
                    break;
                }
            }

            summary.lines_read += 1;

            match parse_row(strip_line_ending(&buf), self.options) {
                Ok(Row::Header) => summary.header_rows += 1,
                Ok(Row::Trip { zone, hour }) => {
                    self.record(zone, hour);
                    summary.rows_counted += 1;
                }
                Err(e) => {
                    trace!("Skipping line {}: {}", summary.lines_read, e);
                    summary.rows_skipped += 1;
                }
            }
        }

        debug!("Ingestion finished: {}", summary.summary());
        self.last_summary = summary;
        summary
    }

    /// Top `k` zones by trip count
    ///
    /// **Public** - count descending, zone ascending on ties
    pub fn top_zones(&self, k: usize) -> Vec<ZoneCount> {
        rank_zones(&self.zone_counts, k)
    }

    /// Top `k` (zone, hour) slots by trip count
    ///
    /// **Public** - count descending, then zone ascending, then hour ascending
    pub fn top_busy_slots(&self, k: usize) -> Vec<SlotCount> {
        rank_slots(&self.slot_counts, k)
    }

    /// Build a serializable report from the current tallies
    ///
    /// **Public** - used by the report command
    pub fn to_report(&self, source: &str, zones_k: usize, slots_k: usize) -> DemandReport {
        use chrono::Utc;

        DemandReport {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.to_string(),
            total_trips: self.total_trips(),
            top_zones: self.top_zones(zones_k),
            top_slots: self.top_busy_slots(slots_k),
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Trips counted for a zone (0 if never seen)
    pub fn zone_count(&self, zone: impl AsRef<[u8]>) -> u64 {
        self.zone_counts.get(zone.as_ref()).copied().unwrap_or(0)
    }

    /// Trips counted for a zone during one hour (0 if never seen)
    pub fn slot_count(&self, zone: impl AsRef<[u8]>, hour: u8) -> u64 {
        self.slot_counts
            .get(&SlotKey::new(zone.as_ref(), hour))
            .copied()
            .unwrap_or(0)
    }

    pub fn distinct_zones(&self) -> usize {
        self.zone_counts.len()
    }

    pub fn distinct_slots(&self) -> usize {
        self.slot_counts.len()
    }

    /// Total trips counted across all zones
    pub fn total_trips(&self) -> u64 {
        self.zone_counts.values().sum()
    }

    /// Summary of the most recent ingestion pass
    pub fn last_summary(&self) -> IngestSummary {
        self.last_summary
    }

    pub fn options(&self) -> IngestOptions {
        self.options
    }

    fn reset(&mut self) {
        self.zone_counts.clear();
        self.slot_counts.clear();
        self.last_summary = IngestSummary::default();
    }

    fn record(&mut self, zone: &[u8], hour: u8) {
        *self.zone_counts.entry(zone.to_vec()).or_insert(0) += 1;
        *self.slot_counts.entry(SlotKey::new(zone, hour)).or_insert(0) += 1;
    }
}

/// Drop the trailing `\n` and then a single `\r`, if present
///
/// **Private** - tolerates CRLF line endings
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Classify one line as a header, a countable trip, or a rejected row
///
/// **Private** - internal helper for ingest_reader
fn parse_row(line: &[u8], options: IngestOptions) -> Result<Row<'_>, LineError> {
    let (zone, timestamp) =
        if options.compact_rows && comma_count(line) == COMPACT_FIELD_COUNT - 1 {
            let fields = split_compact_fields(line)?;
            if is_header(&fields) {
                return Ok(Row::Header);
            }
            (fields[ZONE_COLUMN], fields[COMPACT_TIMESTAMP_COLUMN])
        } else {
            let fields = split_fields(line)?;
            if is_header(&fields) {
                return Ok(Row::Header);
            }
            (fields[ZONE_COLUMN], fields[TIMESTAMP_COLUMN])
        };

    if zone.is_empty() {
        return Err(LineError::EmptyZone);
    }

    let hour = parse_hour(timestamp)?;
    Ok(Row::Trip { zone, hour })
}
