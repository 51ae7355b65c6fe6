//! Data models for route breadcrumbs
//!
//! This module defines the core data structures used throughout the resolver,
//! including breadcrumb items, assembled trails, classification outcomes and
//! batch reports.

use serde::{Deserialize, Serialize};

/// Label of the anchor item that starts every non-empty trail
pub const HOME_LABEL: &str = "Home";

/// Href of the anchor item
pub const HOME_HREF: &str = "/";

/// A single item in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Human-readable label
    pub label: String,

    /// Link target; `None` marks the current location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    /// Create a navigable item
    pub fn linked(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// Create an item representing the current location
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// The anchor item every non-empty trail starts with
    pub fn home() -> Self {
        Self::linked(HOME_LABEL, HOME_HREF)
    }

    /// Whether this item renders as a link
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// An ordered breadcrumb trail, from Home to the current location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    /// Items in display order
    pub items: Vec<BreadcrumbItem>,
}

impl Trail {
    /// Create an empty trail (the root path)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreadcrumbItem> {
        self.items.iter()
    }

    /// Last item in the trail, linked or not
    pub fn terminal(&self) -> Option<&BreadcrumbItem> {
        self.items.last()
    }

    /// The item marked as the current location (last item without an href)
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.items.iter().rev().find(|item| !item.is_link())
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    /// Get the formatted trail string
    pub fn path(&self) -> String {
        self.labels().join(" > ")
    }

    /// Count of navigable items
    pub fn link_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_link()).count()
    }
}

impl From<Vec<BreadcrumbItem>> for Trail {
    fn from(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a BreadcrumbItem;
    type IntoIter = std::slice::Iter<'a, BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Outcome of classifying one path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Emit an item with this label; link it when eligible
    Emit { label: String, link_eligible: bool },

    /// Emit nothing for this segment
    Skip,
}

impl Classification {
    pub fn emit(label: impl Into<String>, link_eligible: bool) -> Self {
        Classification::Emit {
            label: label.into(),
            link_eligible,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Classification::Skip)
    }
}

/// A resolved path paired with its trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// Path as supplied by the caller
    pub path: String,

    /// Number of non-empty segments in the path
    pub segment_count: usize,

    /// Resolved trail
    pub trail: Trail,
}

/// Summary statistics for a batch resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveStats {
    /// Paths resolved
    pub total_paths: usize,

    /// Items across all trails, Home and custom items included
    pub total_items: usize,

    /// Items carrying an href
    pub linked_items: usize,

    /// Segments that produced no item
    pub skipped_segments: usize,

    /// Paths that resolved to an empty trail
    pub empty_trails: usize,
}

/// Metadata about a batch resolve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveMetadata {
    /// Duration of the batch in milliseconds
    pub duration_ms: u64,

    /// Paths resolved per second
    pub paths_per_second: f64,

    /// ISO timestamp of the batch
    pub timestamp: String,

    /// Tool version
    pub tool_version: String,
}

/// Output of a batch resolve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveReport {
    /// Resolved paths, in input order
    pub paths: Vec<ResolvedPath>,

    /// Summary statistics
    pub stats: ResolveStats,

    /// Batch metadata
    pub metadata: ResolveMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_omitted_when_absent() {
        let json = serde_json::to_string(&BreadcrumbItem::current("Detail")).unwrap();
        assert_eq!(json, r#"{"label":"Detail"}"#);
    }

    #[test]
    fn test_trail_serializes_as_list() {
        let trail = Trail::from(vec![BreadcrumbItem::home(), BreadcrumbItem::current("Clients")]);
        let json = serde_json::to_string(&trail).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"Home","href":"/"},{"label":"Clients"}]"#
        );
    }

    #[test]
    fn test_trail_current_skips_trailing_links() {
        let trail = Trail::from(vec![
            BreadcrumbItem::home(),
            BreadcrumbItem::current("Edit"),
            BreadcrumbItem::linked("Help", "/help"),
        ]);

        assert_eq!(trail.terminal().unwrap().label, "Help");
        assert_eq!(trail.current().unwrap().label, "Edit");
        assert_eq!(trail.path(), "Home > Edit > Help");
        assert_eq!(trail.link_count(), 2);
    }
}
