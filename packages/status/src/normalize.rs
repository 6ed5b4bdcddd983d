//! Raw backend code to display label.
//!
//! Unrecognized codes are returned verbatim so new backend values show up
//! on screen instead of rendering as blanks.

use agri_ops_status_models::{
    Priority, ReportType, Severity, TaskStatus, TaskType, Vocabulary, VocabularyKind,
};

use crate::labels::LabelTable;

/// Normalizes `raw` against vocabulary `V`.
///
/// A recognized code maps to the table's label, or to the canonical
/// `snake_case` name when the table has no entry for it.
#[must_use]
pub fn normalize<V: Vocabulary>(raw: &str, labels: &LabelTable) -> String {
    V::from_raw(raw).map_or_else(
        || raw.to_string(),
        |value| {
            labels
                .label(value)
                .map_or_else(|| value.as_ref().to_string(), str::to_string)
        },
    )
}

#[must_use]
pub fn normalize_status(raw: &str, labels: &LabelTable) -> String {
    normalize::<TaskStatus>(raw, labels)
}

#[must_use]
pub fn normalize_priority(raw: &str, labels: &LabelTable) -> String {
    normalize::<Priority>(raw, labels)
}

#[must_use]
pub fn normalize_task_type(raw: &str, labels: &LabelTable) -> String {
    normalize::<TaskType>(raw, labels)
}

#[must_use]
pub fn normalize_report_type(raw: &str, labels: &LabelTable) -> String {
    normalize::<ReportType>(raw, labels)
}

#[must_use]
pub fn normalize_severity(raw: &str, labels: &LabelTable) -> String {
    normalize::<Severity>(raw, labels)
}

/// Normalizes against a vocabulary chosen at runtime.
#[must_use]
pub fn normalize_kind(kind: VocabularyKind, raw: &str, labels: &LabelTable) -> String {
    match kind {
        VocabularyKind::Status => normalize_status(raw, labels),
        VocabularyKind::Priority => normalize_priority(raw, labels),
        VocabularyKind::TaskType => normalize_task_type(raw, labels),
        VocabularyKind::ReportType => normalize_report_type(raw, labels),
        VocabularyKind::Severity => normalize_severity(raw, labels),
    }
}

/// Whether `raw` matches any value of the chosen vocabulary.
#[must_use]
pub fn recognizes(kind: VocabularyKind, raw: &str) -> bool {
    match kind {
        VocabularyKind::Status => TaskStatus::from_raw(raw).is_some(),
        VocabularyKind::Priority => Priority::from_raw(raw).is_some(),
        VocabularyKind::TaskType => TaskType::from_raw(raw).is_some(),
        VocabularyKind::ReportType => ReportType::from_raw(raw).is_some(),
        VocabularyKind::Severity => Severity::from_raw(raw).is_some(),
    }
}

/// Badge color for a raw code, for the vocabularies that have one.
///
/// Task and report types carry no color; unrecognized codes have none.
#[must_use]
pub fn color_key(kind: VocabularyKind, raw: &str) -> Option<&'static str> {
    match kind {
        VocabularyKind::Status => TaskStatus::from_raw(raw).map(TaskStatus::color_key),
        VocabularyKind::Priority => Priority::from_raw(raw).map(Priority::color_key),
        VocabularyKind::Severity => Severity::from_raw(raw).map(Severity::color_key),
        VocabularyKind::TaskType | VocabularyKind::ReportType => None,
    }
}
