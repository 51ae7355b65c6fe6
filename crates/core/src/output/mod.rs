//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI and plain summary
//! output of trails and batch reports.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::{format_report_ansi, format_trail_ansi};
pub use json::{format_json, format_report_json};
pub use yaml::{format_report_yaml, format_yaml};

use crate::models::{ResolveReport, Trail};
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format
    #[default]
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Plain text summary
    Summary,
}

/// Format a trail in the specified format
pub fn format_trail(trail: &Trail, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(trail),
        OutputFormat::Yaml => format_yaml(trail),
        OutputFormat::Ansi => Ok(format_trail_ansi(trail)),
        OutputFormat::Summary => Ok(trail.path()),
    }
}

/// Format a batch report in the specified format
pub fn format_report(report: &ResolveReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_report_json(report),
        OutputFormat::Yaml => format_report_yaml(report),
        OutputFormat::Ansi => Ok(format_report_ansi(report)),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Format as plain text summary, one `path: trail` line per path
fn format_summary(report: &ResolveReport) -> String {
    let mut output = String::new();

    output.push_str("Route Breadcrumbs\n");
    output.push_str("=================\n\n");

    for resolved in &report.paths {
        output.push_str(&format!("{}: {}\n", resolved.path, resolved.trail.path()));
    }

    output.push_str(&format!("\nPaths: {}\n", report.stats.total_paths));
    output.push_str(&format!("Items: {}\n", report.stats.total_items));
    output.push_str(&format!("Linked Items: {}\n", report.stats.linked_items));
    if report.stats.skipped_segments > 0 {
        output.push_str(&format!(
            "Skipped Segments: {}\n",
            report.stats.skipped_segments
        ));
    }
    output.push_str(&format!("Empty Trails: {}\n", report.stats.empty_trails));

    output
}
