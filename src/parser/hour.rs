//! Hour-of-day extraction from loosely formatted timestamps.
//!
//! Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` and bare `HH:MM`.
//! Parsing runs backward from the first colon, so a stray quote or space
//! left between the hour and the colon is tolerated.

use crate::utils::config::MAX_HOUR;
use crate::utils::error::LineError;

/// Maximum number of hour digits consumed before the colon
const MAX_HOUR_DIGITS: usize = 2;

/// Extract the hour (0-23) from a timestamp field
///
/// **Public** - main entry point for hour extraction
///
/// # Algorithm
/// 1. Find the first `:`
/// 2. Step back over any spaces or double quotes
/// 3. Take up to two digits further back
/// 4. Read them left to right as a decimal hour
///
/// # Errors
/// * `LineError::MissingColon` - no `:` in the field
/// * `LineError::MissingHourDigits` - no digit directly before the colon
/// * `LineError::HourOutOfRange` - the digits read as an hour above 23
pub fn parse_hour<S>(timestamp: &S) -> Result<u8, LineError>
where
    S: AsRef<[u8]> + ?Sized,
{
    let bytes = timestamp.as_ref();
    let colon = bytes
        .iter()
        .position(|&b| b == b':')
        .ok_or(LineError::MissingColon)?;

    let mut end = colon;
    while end > 0 && matches!(bytes[end - 1], b' ' | b'"') {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && end - start < MAX_HOUR_DIGITS && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }

    if start == end {
        return Err(LineError::MissingHourDigits);
    }

    let hour = bytes[start..end]
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

    if hour > MAX_HOUR {
        return Err(LineError::HourOutOfRange(hour));
    }

    Ok(hour as u8)
}
