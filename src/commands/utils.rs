use crate::output::read_report;
use crate::utils::config::{DEFAULT_TOP_K, REPORT_SCHEMA_VERSION};
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Total Trips: {}", report.total_trips);
    println!("  Zones: {}", report.top_zones.len());
    println!("  Slots: {}", report.top_slots.len());

    if report.version != REPORT_SCHEMA_VERSION {
        println!(
            "  ! Schema version differs from current ({})",
            REPORT_SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Report fields as (path, type, meaning), nested entries indented
const SCHEMA_FIELDS: &[(&str, &str, &str)] = &[
    ("version", "string", "Schema version (e.g., '1.0.0')"),
    ("source", "string", "Ingested CSV path"),
    ("total_trips", "number", "Rows counted"),
    ("top_zones", "array", "Busiest pickup zones"),
    ("  zone", "string", "Pickup zone identifier"),
    ("  count", "number", "Trips from this zone"),
    ("top_slots", "array", "Busiest zone-hour slots"),
    ("  zone", "string", "Pickup zone identifier"),
    ("  hour", "number", "Hour of day (0-23)"),
    ("  count", "number", "Trips in this slot"),
    ("generated_at", "string", "RFC 3339 timestamp"),
];

/// How each ranking is ordered in the written report
const RANKING_NOTES: &[&str] = &[
    "top_zones: count descending, then zone ascending by raw bytes",
    "top_slots: count descending, then zone ascending by raw bytes, then hour ascending",
    "Zones are compared as source bytes; invalid UTF-8 is shown as U+FFFD",
];

/// Build the schema description printed by `schema`
///
/// **Public** - separated from printing so it can be tested
pub fn schema_text(show_details: bool) -> String {
    let mut out = format!(
        "Zone Demand Report Schema\nCurrent Version: {}\n\n",
        REPORT_SCHEMA_VERSION
    );

    if !show_details {
        out.push_str("Use --show for detailed schema information\n");
        return out;
    }

    out.push_str("Schema Structure:\n");
    for (path, kind, meaning) in SCHEMA_FIELDS {
        out.push_str(&format!("  {:<16} {:<8} - {}\n", path, kind, meaning));
    }

    out.push_str("\nRanking Order:\n");
    for note in RANKING_NOTES {
        out.push_str(&format!("  {}\n", note));
    }
    out
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    print!("{}", schema_text(show_details));
}

/// Display version information
pub fn display_version() {
    println!(
        "Zone Demand v{} (report schema v{}, default top-k {})",
        env!("CARGO_PKG_VERSION"),
        REPORT_SCHEMA_VERSION,
        DEFAULT_TOP_K
    );
}
