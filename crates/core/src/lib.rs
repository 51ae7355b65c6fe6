//! mta_route_breadcrumbs_core - Core library for route breadcrumbs
//!
//! This crate turns the navigation path of a record-management application
//! into an ordered breadcrumb trail of labels and optional links.
//!
//! # Features
//!
//! - **Context-sensitive ids**: Numeric segments are labelled from the
//!   section before them and the action after them.
//! - **Label tables**: Built-in labels merged with caller overrides, loadable
//!   from JSON or YAML.
//! - **Pluggable rules**: The classifier is an ordered list of guarded rules
//!   that callers can extend.
//! - **Total**: Resolving never fails; unknown segments show their raw text.
//! - **Multiple Output Formats**: JSON, YAML, ANSI-colored and plain text.
//!
//! # Example
//!
//! ```rust
//! use mta_route_breadcrumbs_core::{resolve, BreadcrumbItem};
//!
//! let trail = resolve("/clients/123/edit", None, &[]);
//!
//! assert_eq!(trail.items[1], BreadcrumbItem::linked("Clients", "/clients"));
//! assert_eq!(trail.path(), "Home > Clients > Detail > Edit");
//! ```

pub mod classifier;
pub mod engine;
pub mod labels;
pub mod models;
pub mod output;
pub mod path;

// Re-exports for convenience
pub use classifier::{ClassificationRule, SegmentClassifier, SegmentContext};
pub use engine::{resolve, BreadcrumbResolver};
pub use labels::{ConfigError, LabelTable};
pub use models::{
    BreadcrumbItem, Classification, ResolveMetadata, ResolveReport, ResolveStats, ResolvedPath,
    Trail,
};
pub use output::{format_report, format_trail, FormatError, OutputFormat};
