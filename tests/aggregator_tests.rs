use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use zone_demand::{IngestOptions, SlotCount, TripAggregator, ZoneCount};

const SAMPLE: &str = "TripID,PickupZoneID,DriverID,PickupDateTime,DropoffZoneID,Fare
1,ZoneA,D1,2023-01-01 08:15:00,ZoneB,12.50
2,ZoneA,D2,2023-01-01T08:47:00,ZoneC,9.00
3,ZoneB,D3,2023-01-01 23:59:59,ZoneA,20.00
";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn ingest(contents: &str) -> TripAggregator {
    let file = csv_file(contents);
    let mut aggregator = TripAggregator::new();
    aggregator.ingest(file.path());
    aggregator
}

#[test]
fn test_sample_scenario() {
    let aggregator = ingest(SAMPLE);

    assert_eq!(
        aggregator.top_zones(10),
        vec![ZoneCount::new("ZoneA", 2), ZoneCount::new("ZoneB", 1)]
    );
    assert_eq!(
        aggregator.top_busy_slots(10),
        vec![SlotCount::new("ZoneA", 8, 2), SlotCount::new("ZoneB", 23, 1)]
    );
}

#[test]
fn test_crlf_line_endings() {
    let aggregator = ingest(&SAMPLE.replace('\n', "\r\n"));

    assert_eq!(
        aggregator.top_zones(10),
        vec![ZoneCount::new("ZoneA", 2), ZoneCount::new("ZoneB", 1)]
    );
}

#[test]
fn test_empty_zone_row_skipped() {
    let aggregator = ingest(&format!("{}{}\n", SAMPLE, ",,D4,2023-01-01 10:00:00,,"));

    assert_eq!(aggregator.total_trips(), 3);
    assert_eq!(aggregator.zone_count(""), 0);
    assert_eq!(aggregator.last_summary().rows_skipped, 1);
}

#[test]
fn test_timestamp_without_colon_skipped() {
    let aggregator = ingest(&format!("{}{}\n", SAMPLE, "4,ZoneD,D5,not-a-date,ZoneA,5"));

    assert_eq!(aggregator.zone_count("ZoneD"), 0);
    assert_eq!(aggregator.distinct_zones(), 2);
}

#[test]
fn test_header_row_excluded_even_if_parseable() {
    let aggregator = ingest("TripID,ZoneH,D1,2023-01-01 08:15:00,ZoneB,1\n");

    assert!(aggregator.top_zones(10).is_empty());
    assert_eq!(aggregator.last_summary().header_rows, 1);
}

#[test]
fn test_partial_header_markers() {
    let aggregator = ingest(
        "id,PickupZoneID,x,y,z,w\n\
         id,zone,x,PickupDateTime,z,w\n\
         1,ZoneA,D1,2023-01-01 08:15:00,ZoneB,1\n",
    );

    assert_eq!(aggregator.top_zones(10), vec![ZoneCount::new("ZoneA", 1)]);
    assert_eq!(aggregator.last_summary().header_rows, 2);
}

#[test]
fn test_no_header_required() {
    let aggregator = ingest("1,ZoneA,D1,2023-01-01 08:15:00,ZoneB,12.50\n");
    assert_eq!(aggregator.top_zones(10), vec![ZoneCount::new("ZoneA", 1)]);
}

#[test]
fn test_quoted_fields_and_extra_commas() {
    let aggregator = ingest(
        "1, \"ZoneA\" ,D1,\"2023-01-01 08:15:00\",ZoneB,\"note, with, commas\"\n\
         2,ZoneA,D1, 2023-01-01T09:00:00 ,ZoneB,1,2,3\n",
    );

    assert_eq!(aggregator.zone_count("ZoneA"), 2);
    assert_eq!(aggregator.slot_count("ZoneA", 8), 1);
    assert_eq!(aggregator.slot_count("ZoneA", 9), 1);
}

#[test]
fn test_zones_are_case_sensitive() {
    let aggregator = ingest(
        "1,zonea,D1,2023-01-01 08:15:00,ZoneB,1\n\
         2,ZoneA,D1,2023-01-01 08:15:00,ZoneB,1\n",
    );

    assert_eq!(aggregator.distinct_zones(), 2);
    assert_eq!(
        aggregator.top_zones(10),
        vec![ZoneCount::new("ZoneA", 1), ZoneCount::new("zonea", 1)]
    );
}

#[test]
fn test_out_of_range_hour_skipped() {
    let aggregator = ingest("1,ZoneA,D1,2023-01-01 24:00:00,ZoneB,1\n");
    assert!(aggregator.top_busy_slots(10).is_empty());
}

#[test]
fn test_top_k_zero_is_empty() {
    let aggregator = ingest(SAMPLE);
    assert!(aggregator.top_zones(0).is_empty());
    assert!(aggregator.top_busy_slots(0).is_empty());
}

#[test]
fn test_top_k_larger_than_tally_returns_all() {
    let aggregator = ingest(SAMPLE);
    let zones = aggregator.top_zones(1_000);
    assert_eq!(zones.len(), 2);
    assert_ne!(zones[0].zone, zones[1].zone);
}

#[test]
fn test_top_k_truncates() {
    let aggregator = ingest(SAMPLE);
    assert_eq!(aggregator.top_zones(1), vec![ZoneCount::new("ZoneA", 2)]);
    assert_eq!(
        aggregator.top_busy_slots(1),
        vec![SlotCount::new("ZoneA", 8, 2)]
    );
}

#[test]
fn test_reingest_discards_prior_tallies() {
    let first = csv_file(SAMPLE);
    let second = csv_file("9,ZoneZ,D9,2023-01-01 03:00:00,ZoneA,1\n");

    let mut aggregator = TripAggregator::new();
    aggregator.ingest(first.path());
    aggregator.ingest(second.path());

    assert_eq!(aggregator.top_zones(10), vec![ZoneCount::new("ZoneZ", 1)]);
    assert_eq!(
        aggregator.top_busy_slots(10),
        vec![SlotCount::new("ZoneZ", 3, 1)]
    );
}

#[test]
fn test_nonexistent_path_leaves_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut aggregator = ingest(SAMPLE);

    let summary = aggregator.ingest(dir.path().join("missing.csv"));

    assert!(!summary.source_opened);
    assert!(aggregator.top_zones(10).is_empty());
    assert!(aggregator.top_busy_slots(10).is_empty());
}

#[test]
fn test_slot_counts_sum_to_zone_counts() {
    let mut data = String::from("TripID,PickupZoneID,DriverID,PickupDateTime,DropoffZoneID,Fare\n");
    for i in 0..200u32 {
        let zone = format!("Zone{}", i % 7);
        let hour = (i * 5) % 24;
        data.push_str(&format!("{},{},D,2023-01-01 {:02}:10:00,X,1\n", i, zone, hour));
    }
    data.push_str("bad,row\n");

    let aggregator = ingest(&data);
    let zones = aggregator.top_zones(usize::MAX);
    let slots = aggregator.top_busy_slots(usize::MAX);

    for zone in &zones {
        let slot_total: u64 = slots
            .iter()
            .filter(|s| s.zone == zone.zone)
            .map(|s| s.count)
            .sum();
        assert_eq!(slot_total, zone.count, "zone {}", zone.zone);
    }
    assert_eq!(aggregator.total_trips(), 200);

    let summary = aggregator.last_summary();
    assert_eq!(
        summary.lines_read,
        summary.rows_counted + summary.header_rows + summary.rows_skipped
    );
}

#[test]
fn test_rankings_are_sorted() {
    let aggregator = ingest(
        "1,B,D,2023-01-01 01:00,X,1\n\
         2,A,D,2023-01-01 02:00,X,1\n\
         3,C,D,2023-01-01 03:00,X,1\n\
         4,C,D,2023-01-01 04:00,X,1\n\
         5,A,D,2023-01-01 02:30,X,1\n\
         6,B,D,2023-01-01 00:30,X,1\n",
    );

    let zones = aggregator.top_zones(10);
    for pair in zones.windows(2) {
        assert!(
            pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].zone < pair[1].zone)
        );
    }

    let slots = aggregator.top_busy_slots(10);
    assert_eq!(slots[0], SlotCount::new("A", 2, 2));
    for pair in slots.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count > b.count
                || (a.count == b.count && a.zone < b.zone)
                || (a.count == b.count && a.zone == b.zone && a.hour < b.hour)
        );
    }
}

#[test]
fn test_compact_rows_opt_in() {
    let data = "TripID,PickupZoneID,PickupDateTime\n\
                1,ZoneA,2023-01-01 06:00:00\n\
                2,ZoneA,D2,2023-01-01T07:00:00,ZoneC,9.00\n";
    let file = csv_file(data);

    let mut strict = TripAggregator::new();
    strict.ingest(file.path());
    assert_eq!(strict.total_trips(), 1);

    let mut compact = TripAggregator::with_options(IngestOptions { compact_rows: true });
    compact.ingest(file.path());
    assert_eq!(compact.total_trips(), 2);
    assert_eq!(compact.slot_count("ZoneA", 6), 1);
    assert_eq!(compact.slot_count("ZoneA", 7), 1);
    assert_eq!(compact.last_summary().header_rows, 1);
}

#[test]
fn test_zone_identity_is_exact_source_bytes() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1,Zone\xff,D1,2023-01-01 08:15:00,ZoneB,1\n").unwrap();
    file.write_all(b"2,Zone\xfe,D2,2023-01-01 08:20:00,ZoneB,1\n").unwrap();
    file.write_all("3,ZoneA\u{00A0},D3,2023-01-01 08:25:00,ZoneB,1\n".as_bytes()).unwrap();
    file.write_all(b"4,ZoneA,D4,2023-01-01 08:30:00,ZoneB,1\n").unwrap();
    file.flush().unwrap();

    let mut aggregator = TripAggregator::new();
    aggregator.ingest(file.path());

    assert_eq!(aggregator.distinct_zones(), 4);
    assert_eq!(aggregator.distinct_slots(), 4);
    assert_eq!(aggregator.zone_count(b"Zone\xff"), 1);
    assert_eq!(aggregator.zone_count(b"Zone\xfe"), 1);
    assert_eq!(aggregator.top_zones(10).len(), 4);
    assert_eq!(aggregator.top_busy_slots(10).len(), 4);
}
