//! Breadcrumb engine module
//!
//! This module provides the trail assembler: it runs the segment classifier
//! left to right over a path, anchors the trail at Home, makes the last
//! computed item the current location and appends caller-supplied items.

use crate::classifier::{SegmentClassifier, SegmentContext};
use crate::labels::LabelTable;
use crate::models::{
    BreadcrumbItem, Classification, ResolveMetadata, ResolveReport, ResolveStats, ResolvedPath,
    Trail,
};
use crate::path::segments;
use rayon::prelude::*;
use std::time::Instant;

/// A trail plus the segment counts batch stats need
struct Assembled {
    trail: Trail,
    segment_count: usize,
    skipped: usize,
}

/// Resolves navigation paths into breadcrumb trails
///
/// Holds no per-call state; a single resolver may be shared across threads.
pub struct BreadcrumbResolver {
    classifier: SegmentClassifier,
    defaults: LabelTable,
}

impl Default for BreadcrumbResolver {
    fn default() -> Self {
        Self {
            classifier: SegmentClassifier::default(),
            defaults: LabelTable::defaults(),
        }
    }
}

impl BreadcrumbResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the classifier (builder pattern)
    pub fn with_classifier(mut self, classifier: SegmentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the built-in label table (builder pattern)
    pub fn with_defaults(mut self, defaults: LabelTable) -> Self {
        self.defaults = defaults;
        self
    }

    /// The table labels fall back to when no override applies
    pub fn defaults(&self) -> &LabelTable {
        &self.defaults
    }

    /// Default table with `overrides` applied on top
    pub fn effective_labels(&self, overrides: Option<&LabelTable>) -> LabelTable {
        self.defaults.merged(overrides)
    }

    /// Resolve a path into its trail
    pub fn resolve(
        &self,
        path: &str,
        overrides: Option<&LabelTable>,
        custom_items: &[BreadcrumbItem],
    ) -> Trail {
        let labels = self.effective_labels(overrides);
        self.resolve_with_labels(path, &labels, custom_items).trail
    }

    /// Resolve with an already merged table
    fn resolve_with_labels(
        &self,
        path: &str,
        labels: &LabelTable,
        custom_items: &[BreadcrumbItem],
    ) -> Assembled {
        let segs = segments(path);
        tracing::debug!(path, segments = segs.len(), "resolving breadcrumb trail");

        if segs.is_empty() {
            return Assembled {
                trail: Trail::empty(),
                segment_count: 0,
                skipped: 0,
            };
        }

        let mut items = Vec::with_capacity(segs.len() + 1 + custom_items.len());
        items.push(BreadcrumbItem::home());

        let mut skipped = 0;
        for ctx in SegmentContext::all(&segs, labels) {
            match self.classifier.classify(&ctx) {
                Classification::Emit {
                    label,
                    link_eligible,
                } => {
                    let href = link_eligible.then(|| ctx.href());
                    items.push(BreadcrumbItem { label, href });
                }
                Classification::Skip => {
                    tracing::trace!(
                        segment = ctx.current(),
                        index = ctx.index(),
                        "segment skipped"
                    );
                    skipped += 1;
                }
            }
        }

        // The current page is never a link, whatever the rule decided. Once
        // custom items follow, the last computed item is no longer current.
        if custom_items.is_empty() && items.len() > 1 {
            if let Some(last) = items.last_mut() {
                last.href = None;
            }
        }

        items.extend_from_slice(custom_items);
        Assembled {
            trail: Trail::from(items),
            segment_count: segs.len(),
            skipped,
        }
    }

    /// Resolve many paths in parallel; results keep input order
    pub fn resolve_many<S: AsRef<str> + Sync>(
        &self,
        paths: &[S],
        overrides: Option<&LabelTable>,
        custom_items: &[BreadcrumbItem],
    ) -> ResolveReport {
        let start = Instant::now();
        let labels = self.effective_labels(overrides);

        let resolved: Vec<(ResolvedPath, usize)> = paths
            .par_iter()
            .map(|path| {
                let path = path.as_ref();
                let assembled = self.resolve_with_labels(path, &labels, custom_items);
                let resolved = ResolvedPath {
                    path: path.to_string(),
                    segment_count: assembled.segment_count,
                    trail: assembled.trail,
                };
                (resolved, assembled.skipped)
            })
            .collect();

        let stats = calculate_stats(&resolved);
        let paths: Vec<ResolvedPath> = resolved.into_iter().map(|(r, _)| r).collect();

        let duration = start.elapsed();
        let metadata = ResolveMetadata {
            duration_ms: duration.as_millis() as u64,
            paths_per_second: if duration.as_secs_f64() > 0.0 {
                paths.len() as f64 / duration.as_secs_f64()
            } else {
                paths.len() as f64
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        ResolveReport {
            paths,
            stats,
            metadata,
        }
    }
}

/// Calculate batch statistics
fn calculate_stats(resolved: &[(ResolvedPath, usize)]) -> ResolveStats {
    let mut stats = ResolveStats {
        total_paths: resolved.len(),
        ..Default::default()
    };

    for (path, skipped) in resolved {
        stats.total_items += path.trail.len();
        stats.linked_items += path.trail.link_count();
        stats.skipped_segments += skipped;
        if path.trail.is_empty() {
            stats.empty_trails += 1;
        }
    }

    stats
}

/// Resolve a path with the built-in rules and labels
pub fn resolve(
    path: &str,
    overrides: Option<&LabelTable>,
    custom_items: &[BreadcrumbItem],
) -> Trail {
    BreadcrumbResolver::default().resolve(path, overrides, custom_items)
}
