//! Segment classifier
//!
//! Decides, for one path segment and its neighbours, which label to show and
//! whether the item may link. Classification runs an ordered list of guarded
//! rules; the first rule whose guard matches decides the outcome.

use crate::labels::LabelTable;
use crate::models::Classification;
use crate::path::{href_for, is_numeric};

/// Section segments the rules key on
pub mod segment {
    pub const CLIENTS: &str = "clients";
    pub const SUPPORT_PLANS: &str = "support-plans";
    pub const SERVICE_LOGS: &str = "service-logs";
    pub const ASSESSMENTS: &str = "assessments";
    pub const NEW: &str = "new";
    pub const EDIT: &str = "edit";
}

const DETAIL_LABEL: &str = "Detail";
const RECORD_LABEL: &str = "Record";
const NEW_LABEL: &str = "New";
const EDIT_LABEL: &str = "Edit";
const SUPPORT_PLAN_LABEL: &str = "Support Plan";

/// A segment together with everything a rule may look at
///
/// `index` always points at an existing segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContext<'a> {
    segments: &'a [&'a str],
    index: usize,
    labels: &'a LabelTable,
}

impl<'a> SegmentContext<'a> {
    /// Context for the segment at `index`, or `None` when out of range
    pub fn new(segments: &'a [&'a str], index: usize, labels: &'a LabelTable) -> Option<Self> {
        (index < segments.len()).then_some(Self {
            segments,
            index,
            labels,
        })
    }

    /// Contexts for every segment, left to right
    pub fn all(
        segments: &'a [&'a str],
        labels: &'a LabelTable,
    ) -> impl Iterator<Item = SegmentContext<'a>> {
        (0..segments.len()).map(move |index| Self {
            segments,
            index,
            labels,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn labels(&self) -> &'a LabelTable {
        self.labels
    }

    pub fn current(&self) -> &'a str {
        self.segments[self.index]
    }

    pub fn previous(&self) -> Option<&'a str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .copied()
    }

    pub fn next(&self) -> Option<&'a str> {
        self.segments.get(self.index + 1).copied()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.segments.len()
    }

    /// Href pointing at this segment
    pub fn href(&self) -> String {
        href_for(self.segments, self.index)
    }

    fn previous_is(&self, key: &str) -> bool {
        self.previous() == Some(key)
    }

    fn next_is(&self, key: &str) -> bool {
        self.next() == Some(key)
    }
}

/// A guarded classification rule
pub trait ClassificationRule: Send + Sync {
    /// Short name, used in trace output
    fn name(&self) -> &'static str;

    /// Classify the segment, or `None` when the guard does not match
    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification>;
}

/// Record id under support plans
pub struct SupportPlanRecord;

impl ClassificationRule for SupportPlanRecord {
    fn name(&self) -> &'static str {
        "support-plan-record"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        if !is_numeric(ctx.current()) || !ctx.previous_is(segment::SUPPORT_PLANS) {
            return None;
        }
        Some(Classification::emit(DETAIL_LABEL, true))
    }
}

/// Record id under service logs
///
/// Only an id being edited gets an item; a bare log id is dropped from the
/// trail entirely.
pub struct ServiceLogRecord;

impl ClassificationRule for ServiceLogRecord {
    fn name(&self) -> &'static str {
        "service-log-record"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        if !is_numeric(ctx.current()) || !ctx.previous_is(segment::SERVICE_LOGS) {
            return None;
        }
        if ctx.next_is(segment::EDIT) {
            Some(Classification::emit(RECORD_LABEL, false))
        } else {
            Some(Classification::Skip)
        }
    }
}

/// Record id under assessments
pub struct AssessmentRecord;

impl ClassificationRule for AssessmentRecord {
    fn name(&self) -> &'static str {
        "assessment-record"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        if !is_numeric(ctx.current()) || !ctx.previous_is(segment::ASSESSMENTS) {
            return None;
        }
        Some(Classification::emit(DETAIL_LABEL, true))
    }
}

/// Record id under clients
pub struct ClientRecord;

impl ClassificationRule for ClientRecord {
    fn name(&self) -> &'static str {
        "client-record"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        if !is_numeric(ctx.current()) || !ctx.previous_is(segment::CLIENTS) {
            return None;
        }
        let link_eligible = match ctx.next() {
            Some(segment::SUPPORT_PLANS) | Some(segment::EDIT) => true,
            _ => !ctx.is_last(),
        };
        Some(Classification::emit(DETAIL_LABEL, link_eligible))
    }
}

/// Record id under any other parent, or at the start of the path
pub struct NumericRecord;

impl ClassificationRule for NumericRecord {
    fn name(&self) -> &'static str {
        "numeric-record"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        is_numeric(ctx.current()).then(|| Classification::emit(DETAIL_LABEL, !ctx.is_last()))
    }
}

/// The "new" action
pub struct NewAction;

impl ClassificationRule for NewAction {
    fn name(&self) -> &'static str {
        "new-action"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        if ctx.current() != segment::NEW {
            return None;
        }
        // Plans and logs always read "New"; the table does not apply there.
        let label = match ctx.previous() {
            Some(segment::SUPPORT_PLANS) | Some(segment::SERVICE_LOGS) => NEW_LABEL,
            _ => ctx.labels.label_or(segment::NEW, NEW_LABEL),
        };
        Some(Classification::emit(label, false))
    }
}

/// The "edit" action
pub struct EditAction;

impl ClassificationRule for EditAction {
    fn name(&self) -> &'static str {
        "edit-action"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        (ctx.current() == segment::EDIT)
            .then(|| Classification::emit(ctx.labels.label_or(segment::EDIT, EDIT_LABEL), false))
    }
}

/// Support plans nested below another section
pub struct NestedSupportPlans;

impl ClassificationRule for NestedSupportPlans {
    fn name(&self) -> &'static str {
        "nested-support-plans"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        (ctx.index > 0 && ctx.current() == segment::SUPPORT_PLANS)
            .then(|| Classification::emit(SUPPORT_PLAN_LABEL, false))
    }
}

/// Table label, or the raw segment text when unmapped. Always matches.
pub struct DefaultLabel;

impl ClassificationRule for DefaultLabel {
    fn name(&self) -> &'static str {
        "default-label"
    }

    fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
        let current = ctx.current();
        Some(Classification::emit(
            ctx.labels.label_or(current, current),
            !ctx.is_last(),
        ))
    }
}

/// Ordered rule list
pub struct SegmentClassifier {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self {
            rules: vec![
                Box::new(SupportPlanRecord),
                Box::new(ServiceLogRecord),
                Box::new(AssessmentRecord),
                Box::new(ClientRecord),
                Box::new(NumericRecord),
                Box::new(NewAction),
                Box::new(EditAction),
                Box::new(NestedSupportPlans),
                Box::new(DefaultLabel),
            ],
        }
    }
}

impl SegmentClassifier {
    /// Classifier with no rules; every segment falls through to its raw text
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, consulted after the existing ones (builder pattern)
    pub fn with_rule(mut self, rule: impl ClassificationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Prepend a rule, consulted before the existing ones (builder pattern)
    pub fn with_rule_first(mut self, rule: impl ClassificationRule + 'static) -> Self {
        self.rules.insert(0, Box::new(rule));
        self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Classify one segment
    pub fn classify(&self, ctx: &SegmentContext<'_>) -> Classification {
        for rule in &self.rules {
            if let Some(classification) = rule.classify(ctx) {
                tracing::trace!(
                    segment = ctx.current(),
                    index = ctx.index,
                    rule = rule.name(),
                    ?classification,
                    "classified segment"
                );
                return classification;
            }
        }
        DefaultLabel
            .classify(ctx)
            .unwrap_or(Classification::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_at(path: &[&str], index: usize) -> Classification {
        let labels = LabelTable::defaults();
        let ctx = SegmentContext::new(path, index, &labels).unwrap();
        SegmentClassifier::default().classify(&ctx)
    }

    #[test]
    fn test_context_neighbours() {
        let labels = LabelTable::new();
        let segs = ["clients", "123", "edit"];
        let ctx = SegmentContext::new(&segs, 1, &labels).unwrap();

        assert_eq!(ctx.current(), "123");
        assert_eq!(ctx.previous(), Some("clients"));
        assert_eq!(ctx.next(), Some("edit"));
        assert!(!ctx.is_last());
        assert_eq!(ctx.href(), "/clients/123");

        let first = SegmentContext::new(&segs, 0, &labels).unwrap();
        assert_eq!(first.previous(), None);
    }

    #[test]
    fn test_context_rejects_out_of_range_index() {
        let labels = LabelTable::new();
        let segs = ["a"];
        assert!(SegmentContext::new(&segs, 1, &labels).is_none());
        assert!(SegmentContext::new(&segs, usize::MAX, &labels).is_none());
        assert!(SegmentContext::new(&[], 0, &labels).is_none());

        let last = SegmentContext::new(&segs, 0, &labels).unwrap();
        assert!(last.is_last());
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_all_contexts_in_order() {
        let labels = LabelTable::new();
        let segs = ["clients", "123", "edit"];
        let currents: Vec<&str> = SegmentContext::all(&segs, &labels)
            .map(|ctx| ctx.current())
            .collect();
        assert_eq!(currents, segs);
        assert_eq!(SegmentContext::all(&[], &labels).count(), 0);
    }

    #[test]
    fn test_support_plan_record_always_linkable() {
        let ctx_path = ["support-plans", "456"];
        let labels = LabelTable::new();
        let ctx = SegmentContext::new(&ctx_path, 1, &labels).unwrap();
        assert_eq!(
            SupportPlanRecord.classify(&ctx),
            Some(Classification::emit("Detail", true))
        );
    }

    #[test]
    fn test_service_log_record() {
        assert_eq!(
            classify_at(&["service-logs", "789", "edit"], 1),
            Classification::emit("Record", false)
        );
        assert_eq!(classify_at(&["service-logs", "789"], 1), Classification::Skip);
        assert_eq!(
            classify_at(&["service-logs", "789", "history"], 1),
            Classification::Skip
        );
    }

    #[test]
    fn test_assessment_record_always_linkable() {
        assert_eq!(
            classify_at(&["assessments", "5"], 1),
            Classification::emit("Detail", true)
        );
    }

    #[test]
    fn test_client_record() {
        assert_eq!(
            classify_at(&["clients", "1", "support-plans"], 1),
            Classification::emit("Detail", true)
        );
        assert_eq!(
            classify_at(&["clients", "1", "edit"], 1),
            Classification::emit("Detail", true)
        );
        assert_eq!(
            classify_at(&["clients", "1", "assessments"], 1),
            Classification::emit("Detail", true)
        );
        assert_eq!(
            classify_at(&["clients", "1"], 1),
            Classification::emit("Detail", false)
        );
    }

    #[test]
    fn test_numeric_fallback() {
        assert_eq!(classify_at(&["42"], 0), Classification::emit("Detail", false));
        assert_eq!(
            classify_at(&["settings", "42", "x"], 1),
            Classification::emit("Detail", true)
        );
    }

    #[test]
    fn test_new_bypasses_table_under_plans_and_logs() {
        let labels = LabelTable::defaults().with_label("new", "Create");
        let classifier = SegmentClassifier::default();

        let plans = ["support-plans", "new"];
        let ctx = SegmentContext::new(&plans, 1, &labels).unwrap();
        assert_eq!(classifier.classify(&ctx), Classification::emit("New", false));

        let logs = ["service-logs", "new"];
        let ctx = SegmentContext::new(&logs, 1, &labels).unwrap();
        assert_eq!(classifier.classify(&ctx), Classification::emit("New", false));

        let clients = ["clients", "new"];
        let ctx = SegmentContext::new(&clients, 1, &labels).unwrap();
        assert_eq!(classifier.classify(&ctx), Classification::emit("Create", false));
    }

    #[test]
    fn test_edit_uses_table() {
        let labels = LabelTable::new().with_label("edit", "Modify");
        let segs = ["clients", "1", "edit"];
        let ctx = SegmentContext::new(&segs, 2, &labels).unwrap();
        assert_eq!(
            SegmentClassifier::default().classify(&ctx),
            Classification::emit("Modify", false)
        );

        let empty = LabelTable::new();
        let ctx = SegmentContext::new(&segs, 2, &empty).unwrap();
        assert_eq!(
            SegmentClassifier::default().classify(&ctx),
            Classification::emit("Edit", false)
        );
    }

    #[test]
    fn test_support_plans_top_level_vs_nested() {
        assert_eq!(
            classify_at(&["support-plans", "1"], 0),
            Classification::emit("Support Plans", true)
        );
        assert_eq!(
            classify_at(&["clients", "1", "support-plans"], 2),
            Classification::emit("Support Plan", false)
        );
    }

    #[test]
    fn test_default_label_raw_fallback() {
        assert_eq!(
            classify_at(&["unknown-route"], 0),
            Classification::emit("unknown-route", false)
        );
        assert_eq!(
            classify_at(&["settings", "profile"], 0),
            Classification::emit("Settings", true)
        );
    }

    struct ReportsRule;

    impl ClassificationRule for ReportsRule {
        fn name(&self) -> &'static str {
            "reports"
        }

        fn classify(&self, ctx: &SegmentContext<'_>) -> Option<Classification> {
            (ctx.current() == "reports").then(|| Classification::emit("Reporting", true))
        }
    }

    #[test]
    fn test_custom_rule_first() {
        let classifier = SegmentClassifier::default().with_rule_first(ReportsRule);
        assert_eq!(classifier.rule_names()[0], "reports");

        let labels = LabelTable::defaults();
        let segs = ["reports"];
        let ctx = SegmentContext::new(&segs, 0, &labels).unwrap();
        assert_eq!(classifier.classify(&ctx), Classification::emit("Reporting", true));
    }

    #[test]
    fn test_empty_classifier_falls_back_to_raw_text() {
        let labels = LabelTable::defaults();
        let segs = ["clients", "9"];
        let ctx = SegmentContext::new(&segs, 1, &labels).unwrap();
        assert_eq!(
            SegmentClassifier::empty().classify(&ctx),
            Classification::emit("9", false)
        );
    }
}
