//! JSON output formatter

use crate::models::{ResolveReport, Trail};
use crate::output::FormatError;

/// Format a trail as JSON
pub fn format_json(trail: &Trail) -> Result<String, FormatError> {
    serde_json::to_string_pretty(trail).map_err(FormatError::from)
}

/// Format a batch report as JSON
pub fn format_report_json(report: &ResolveReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}
