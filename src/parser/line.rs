//! Tolerant CSV line splitting.
//!
//! Lines are handled as raw bytes so zone identifiers keep their exact
//! source text, valid UTF-8 or not. Lines are split on the first N-1 commas
//! only; the last field keeps any remaining commas. Quoted commas are not
//! understood.

use crate::utils::config::{
    COMPACT_FIELD_COUNT, FIELD_COUNT, TIMESTAMP_COLUMN, TIMESTAMP_HEADER, TRIP_ID_COLUMN,
    TRIP_ID_HEADER, ZONE_COLUMN, ZONE_HEADER,
};
use crate::utils::error::LineError;

/// Split a raw line into exactly six trimmed fields
///
/// **Public** - main entry point for line splitting
///
/// The first five fields end at the first five commas scanning left to
/// right. The sixth is everything after the fifth comma, unsplit.
///
/// # Errors
/// * `LineError::TooFewFields` - the line has fewer than five commas
///
/// # Example
/// ```
/// use zone_demand::parser::split_fields;
///
/// let fields = split_fields("1, ZoneA ,D1,\"2023-01-01 08:15:00\",ZoneB,12,50").unwrap();
/// assert_eq!(fields[1], b"ZoneA");
/// assert_eq!(fields[3], b"2023-01-01 08:15:00");
/// assert_eq!(fields[5], b"12,50");
/// ```
pub fn split_fields<S>(line: &S) -> Result<[&[u8]; FIELD_COUNT], LineError>
where
    S: AsRef<[u8]> + ?Sized,
{
    split_exact::<FIELD_COUNT>(line.as_ref())
}

/// Split a compact `TripID,PickupZoneID,PickupDateTime` line into three fields
///
/// **Public** - used when compact rows are enabled for ingestion
pub fn split_compact_fields<S>(line: &S) -> Result<[&[u8]; COMPACT_FIELD_COUNT], LineError>
where
    S: AsRef<[u8]> + ?Sized,
{
    split_exact::<COMPACT_FIELD_COUNT>(line.as_ref())
}

fn split_exact<const N: usize>(line: &[u8]) -> Result<[&[u8]; N], LineError> {
    let parts: Vec<&[u8]> = line
        .splitn(N, |&b| b == b',')
        .map(|field| trim_field(field))
        .collect();

    parts.try_into().map_err(|parts: Vec<&[u8]>| LineError::TooFewFields {
        expected: N - 1,
        found: parts.len() - 1,
    })
}

/// Trim ASCII whitespace, then strip one surrounding pair of double quotes
///
/// **Public** - interior quotes are left untouched, so `"5"5"` becomes `5"5`.
/// Non-ASCII whitespace such as U+00A0 is part of the field.
pub fn trim_field<S>(raw: &S) -> &[u8]
where
    S: AsRef<[u8]> + ?Sized,
{
    let raw = raw.as_ref();
    let start = raw.iter().position(|b| !is_space(b)).unwrap_or(raw.len());
    let end = raw.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    let trimmed = &raw[start..end];

    match trimmed {
        [b'"', inner @ .., b'"'] => inner,
        _ => trimmed,
    }
}

/// Space, tab, newline, vertical tab, form feed, carriage return
fn is_space(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Check whether split fields form a header row
///
/// **Public** - any one marker is enough, so partial headers are still skipped
pub fn is_header(fields: &[&[u8]]) -> bool {
    let marks = |column: usize, header: &str| fields.get(column) == Some(&header.as_bytes());

    marks(TRIP_ID_COLUMN, TRIP_ID_HEADER)
        || marks(ZONE_COLUMN, ZONE_HEADER)
        || marks(TIMESTAMP_COLUMN, TIMESTAMP_HEADER)
}

/// Count commas in a line
///
/// **Public** - decides which row layout applies
pub fn comma_count(line: &[u8]) -> usize {
    line.iter().filter(|&&b| b == b',').count()
}
