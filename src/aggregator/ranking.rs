//! Top-K ranking over the zone and slot tallies.
//!
//! Rankings always re-sort explicitly, so hash map iteration order never
//! leaks into the output. Ordering compares raw zone bytes; text is only
//! produced for the entries that survive truncation.

use super::tally::SlotKey;
use crate::parser::schema::{SlotCount, ZoneCount};
use log::debug;
use std::collections::HashMap;

/// Rank zones by trip count
///
/// **Public** - backs `TripAggregator::top_zones`
///
/// # Arguments
/// * `counts` - Zone tally keyed on raw zone bytes
/// * `k` - Number of entries to return
///
/// # Returns
/// At most `k` entries, count descending, ties broken by zone bytes ascending.
/// Empty when `k` is 0; never padded when `k` exceeds the tally size.
pub fn rank_zones(counts: &HashMap<Vec<u8>, u64>, k: usize) -> Vec<ZoneCount> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(&[u8], u64)> = counts
        .iter()
        .map(|(zone, &count)| (zone.as_slice(), count))
        .collect();

    // Zones are unique, so the order is total and an unstable sort is deterministic
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(k);

    debug!("Ranked top {} of {} zones", ranked.len(), counts.len());
    ranked
        .into_iter()
        .map(|(zone, count)| ZoneCount::new(zone_text(zone), count))
        .collect()
}

/// Rank (zone, hour) slots by trip count
///
/// **Public** - backs `TripAggregator::top_busy_slots`
///
/// Ties are broken by zone ascending, then hour ascending.
pub fn rank_slots(counts: &HashMap<SlotKey, u64>, k: usize) -> Vec<SlotCount> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(&SlotKey, u64)> =
        counts.iter().map(|(key, &count)| (key, count)).collect();

    // SlotKey orders by zone bytes, then hour
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(k);

    debug!("Ranked top {} of {} slots", ranked.len(), counts.len());
    ranked
        .into_iter()
        .map(|(key, count)| SlotCount::new(zone_text(&key.zone), key.hour, count))
        .collect()
}

/// Zone bytes as report text; invalid UTF-8 is replaced with U+FFFD
fn zone_text(zone: &[u8]) -> String {
    String::from_utf8_lossy(zone).into_owned()
}
