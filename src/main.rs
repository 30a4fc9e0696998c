//! Zone Demand CLI
//!
//! Reports the busiest pickup zones and zone-hour slots from a trip CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use zone_demand::commands::{
    display_schema, display_version, execute_report, validate_args, validate_report_file,
    ReportArgs,
};
use zone_demand::utils::config::DEFAULT_TOP_K;

/// Zone Demand - busiest pickup zones and hours from trip records
#[derive(Parser, Debug)]
#[command(name = "zone-demand")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ingest a trip CSV and write a demand report
    Report {
        /// Trip CSV file to ingest
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Number of busiest zones to include
        #[arg(long, env = "ZONE_DEMAND_TOP_ZONES", default_value_t = DEFAULT_TOP_K)]
        top_zones: usize,

        /// Number of busiest zone-hour slots to include
        #[arg(long, env = "ZONE_DEMAND_TOP_SLOTS", default_value_t = DEFAULT_TOP_K)]
        top_slots: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Also accept three-column TripID,PickupZoneID,PickupDateTime rows
        #[arg(long)]
        compact_rows: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            output,
            top_zones,
            top_slots,
            summary,
            compact_rows,
        } => {
            let args = ReportArgs {
                input,
                output_json: output,
                top_zones,
                top_slots,
                print_summary: summary,
                compact_rows,
            };

            validate_args(&args)?;
            execute_report(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
