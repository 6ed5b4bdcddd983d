#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Status normalization and deadline urgency classification.
//!
//! One shared place for the badge labels and colors that dashboards, task
//! lists and material-receipt screens show. Labels come from a
//! [`LabelTable`] passed by reference, so the same functions serve every
//! locale.

pub mod labels;
pub mod normalize;
pub mod urgency;

pub use agri_ops_status_models::{
    Locale, Priority, ReportType, Severity, TaskStatus, TaskType, TierPalette,
    UrgencyClassification, UrgencyTier, Vocabulary, VocabularyKind,
};
pub use labels::{LabelTable, LabelTableError};
pub use normalize::{
    color_key, normalize, normalize_kind, normalize_priority, normalize_report_type,
    normalize_severity, normalize_status, normalize_task_type, recognizes,
};
pub use urgency::{classify_urgency, days_until, urgency_message};
