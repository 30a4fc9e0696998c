//! Report command implementation.
//!
//! The report command:
//! 1. Ingests the trip CSV
//! 2. Ranks zones and zone-hour slots
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use crate::aggregator::{IngestOptions, TripAggregator};
use crate::output::{render_text_summary, write_report};
use crate::parser::schema::DemandReport;
use crate::utils::config::{DEFAULT_TOP_K, MAX_TOP_K};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Trip CSV to ingest
    pub input: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Number of zones to include
    pub top_zones: usize,

    /// Number of zone-hour slots to include
    pub top_slots: usize,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Accept three-column `TripID,PickupZoneID,PickupDateTime` rows
    pub compact_rows: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: PathBuf::from("report.json"),
            top_zones: DEFAULT_TOP_K,
            top_slots: DEFAULT_TOP_K,
            print_summary: false,
            compact_rows: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// An unreadable input is not an error: ingestion degrades to an empty
/// report, and a warning is logged.
///
/// # Errors
/// * File write errors
pub fn execute_report(args: &ReportArgs) -> Result<DemandReport> {
    let start_time = Instant::now();

    info!("Starting report for: {}", args.input.display());

    info!("Step 1/3: Ingesting trips...");
    let mut aggregator = TripAggregator::with_options(IngestOptions {
        compact_rows: args.compact_rows,
    });
    let summary = aggregator.ingest(&args.input);

    if !summary.source_opened {
        warn!("Input could not be opened, report will be empty");
    }
    info!("Ingestion: {}", summary.summary());
    debug!(
        "{} distinct zones, {} distinct slots",
        aggregator.distinct_zones(),
        aggregator.distinct_slots()
    );

    info!(
        "Step 2/3: Ranking top {} zones and top {} slots...",
        args.top_zones, args.top_slots
    );
    let report = aggregator.to_report(
        &args.input.display().to_string(),
        args.top_zones,
        args.top_slots,
    );

    info!("Step 3/3: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("DEMAND SUMMARY");
        println!("{}", "=".repeat(60));
        println!("{}", render_text_summary(&report));
        println!("{}", "=".repeat(60));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    for (name, k) in [("top_zones", args.top_zones), ("top_slots", args.top_slots)] {
        if k == 0 {
            anyhow::bail!("{} must be greater than 0", name);
        }
        if k > MAX_TOP_K {
            anyhow::bail!("{} is too large (max {})", name, MAX_TOP_K);
        }
    }

    Ok(())
}
