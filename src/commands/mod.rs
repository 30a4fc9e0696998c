//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;
pub mod utils;

// Re-export main command functions
pub use report::{execute_report, validate_args, ReportArgs};
pub use utils::{display_schema, display_version, schema_text, validate_report_file};
