//! Plain-text rendering of demand reports for the terminal.

use crate::parser::schema::DemandReport;

const ZONE_WIDTH: usize = 32;

/// Render both rankings as fixed-width tables
///
/// **Public** - used by `report --summary`
///
/// Zone names longer than the column are shortened from the left.
pub fn render_text_summary(report: &DemandReport) -> String {
    let mut lines = Vec::new();
    let total = report.total_trips.max(1);

    lines.push(format!("Source:      {}", report.source));
    lines.push(format!("Total trips: {}", report.total_trips));
    lines.push(String::new());

    lines.push("BUSIEST PICKUP ZONES".to_string());
    lines.push(format!("  {:>4}  {:<ZONE_WIDTH$}  {:>10}  {:>7}", "#", "ZONE", "TRIPS", "%"));
    if report.top_zones.is_empty() {
        lines.push("  (no trips)".to_string());
    }
    for (i, entry) in report.top_zones.iter().enumerate() {
        let percentage = entry.count as f64 / total as f64 * 100.0;
        lines.push(format!(
            "  {:>4}  {:<ZONE_WIDTH$}  {:>10}  {:>6.1}%",
            i + 1,
            display_zone(&entry.zone),
            entry.count,
            percentage
        ));
    }

    lines.push(String::new());
    lines.push("BUSIEST ZONE-HOUR SLOTS".to_string());
    lines.push(format!("  {:>4}  {:<ZONE_WIDTH$}  {:>5}  {:>10}", "#", "ZONE", "HOUR", "TRIPS"));
    if report.top_slots.is_empty() {
        lines.push("  (no trips)".to_string());
    }
    for (i, entry) in report.top_slots.iter().enumerate() {
        lines.push(format!(
            "  {:>4}  {:<ZONE_WIDTH$}  {:>5}  {:>10}",
            i + 1,
            display_zone(&entry.zone),
            format!("{:02}:00", entry.hour),
            entry.count
        ));
    }

    lines.join("\n")
}

fn display_zone(zone: &str) -> String {
    let chars = zone.chars().count();
    if chars <= ZONE_WIDTH {
        return zone.to_string();
    }
    let tail: String = zone.chars().skip(chars - (ZONE_WIDTH - 3)).collect();
    format!("...{}", tail)
}
