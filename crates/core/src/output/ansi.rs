//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumb trails and
//! batch reports.

use crate::models::{BreadcrumbItem, ResolveReport, Trail};
use colored::Colorize;

const SEPARATOR: &str = ">";

/// Format a trail as ANSI colored text
///
/// Linked items show their href dimmed; the current location is bold.
pub fn format_trail_ansi(trail: &Trail) -> String {
    if trail.is_empty() {
        return String::new();
    }

    let separator = format!(" {} ", SEPARATOR.dimmed());
    trail
        .iter()
        .map(format_item_ansi)
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Format a single item
fn format_item_ansi(item: &BreadcrumbItem) -> String {
    match &item.href {
        Some(href) => format!("{} {}", item.label.bright_cyan(), format!("({href})").dimmed()),
        None => item.label.bold().bright_white().to_string(),
    }
}

/// Format a batch report as ANSI colored text
pub fn format_report_ansi(report: &ResolveReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "\n{}\n\n",
        "  Route Breadcrumbs  ".bold().on_blue()
    ));

    // Stats summary
    output.push_str(&format!(
        "{} {}  {} {}  {} {}\n\n",
        "Paths:".bold(),
        report.stats.total_paths,
        "Items:".bold(),
        report.stats.total_items,
        "Skipped segments:".bold(),
        report.stats.skipped_segments
    ));

    for resolved in &report.paths {
        output.push_str(&format!("{}\n", resolved.path.bright_yellow().bold()));
        if resolved.trail.is_empty() {
            output.push_str(&format!("   {}\n", "(root)".dimmed()));
        } else {
            output.push_str(&format!("   {}\n", format_trail_ansi(&resolved.trail)));
        }
    }

    // Footer
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "Resolved in {}ms ({:.2} paths/sec)",
            report.metadata.duration_ms, report.metadata.paths_per_second
        )
        .dimmed()
    ));

    output
}
