#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical vocabularies for backend status-like fields.
//!
//! The backend sends free-text codes ("InProgress", "in progress",
//! "IN_PROGRESS") for task status, priority, task type, report type and
//! severity. Each vocabulary is its own enum with its own alias table;
//! they are kept apart because their key spaces overlap ("high" is both a
//! priority and a severity).

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Folds a raw code into its lookup key: lowercase with whitespace, `-`
/// and `_` removed.
#[must_use]
pub fn fold_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A closed set of canonical values that raw backend codes map onto.
pub trait Vocabulary: Copy + Eq + AsRef<str> + 'static {
    /// Which vocabulary this is.
    const KIND: VocabularyKind;

    /// Every canonical value.
    fn all() -> &'static [Self];

    /// Folded keys (see [`fold_key`]) that map to this value.
    fn aliases(self) -> &'static [&'static str];

    /// Matches a raw backend code, ignoring case and separators.
    #[must_use]
    fn from_raw(raw: &str) -> Option<Self> {
        let key = fold_key(raw);
        Self::all()
            .iter()
            .copied()
            .find(|value| value.aliases().contains(&key.as_str()))
    }
}

/// Identifies one of the independent vocabularies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VocabularyKind {
    Status,
    Priority,
    TaskType,
    ReportType,
    Severity,
}

/// Lifecycle status of a task, project or order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    Active,
    Inactive,
    /// Not started yet ("todo", "to-do", "pending").
    Todo,
    InProgress,
    /// Finished ("completed", "done").
    Completed,
    /// Called off ("cancelled", "canceled").
    Cancelled,
}

impl TaskStatus {
    /// Badge color shared by every screen that shows a status.
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        match self {
            Self::Active | Self::Completed => "#16A34A",
            Self::Inactive | Self::Todo => "#6B7280",
            Self::InProgress => "#2563EB",
            Self::Cancelled => "#DC2626",
        }
    }
}

impl Vocabulary for TaskStatus {
    const KIND: VocabularyKind = VocabularyKind::Status;

    fn all() -> &'static [Self] {
        &[
            Self::Active,
            Self::Inactive,
            Self::Todo,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Active => &["active"],
            Self::Inactive => &["inactive"],
            Self::Todo => &["todo", "pending"],
            Self::InProgress => &["inprogress", "ongoing"],
            Self::Completed => &["completed", "complete", "done"],
            Self::Cancelled => &["cancelled", "canceled"],
        }
    }
}

/// Task priority.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Priority {
    Low,
    /// Also sent as "normal".
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        match self {
            Self::Low => "#16A34A",
            Self::Medium => "#D97706",
            Self::High => "#DC2626",
        }
    }
}

impl Vocabulary for Priority {
    const KIND: VocabularyKind = VocabularyKind::Priority;

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["low"],
            Self::Medium => &["medium", "normal"],
            Self::High => &["high"],
        }
    }
}

/// Kind of field work a task represents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskType {
    /// UAV or manual pesticide spraying
    Spraying,
    Fertilizing,
    Seeding,
    Harvesting,
    /// Field inspection or drone survey
    Inspection,
    /// Delivery of seed, fertilizer or chemicals to a farmer
    MaterialDelivery,
}

impl Vocabulary for TaskType {
    const KIND: VocabularyKind = VocabularyKind::TaskType;

    fn all() -> &'static [Self] {
        &[
            Self::Spraying,
            Self::Fertilizing,
            Self::Seeding,
            Self::Harvesting,
            Self::Inspection,
            Self::MaterialDelivery,
        ]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Spraying => &["spraying", "spray"],
            Self::Fertilizing => &["fertilizing", "fertilize", "fertilizer"],
            Self::Seeding => &["seeding", "sowing", "seed"],
            Self::Harvesting => &["harvesting", "harvest"],
            Self::Inspection => &["inspection", "survey"],
            Self::MaterialDelivery => &["materialdelivery", "delivery", "materialreceipt"],
        }
    }
}

/// Kind of field report submitted by a supervisor or UAV operator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportType {
    Progress,
    Incident,
    Quality,
    Completion,
}

impl Vocabulary for ReportType {
    const KIND: VocabularyKind = VocabularyKind::ReportType;

    fn all() -> &'static [Self] {
        &[
            Self::Progress,
            Self::Incident,
            Self::Quality,
            Self::Completion,
        ]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Progress => &["progress", "daily"],
            Self::Incident => &["incident", "issue"],
            Self::Quality => &["quality"],
            Self::Completion => &["completion", "final"],
        }
    }
}

/// Severity of a reported incident.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Low,
    /// Also sent as "moderate".
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        match self {
            Self::Low => "#16A34A",
            Self::Medium => "#D97706",
            Self::High => "#EA580C",
            Self::Critical => "#DC2626",
        }
    }
}

impl Vocabulary for Severity {
    const KIND: VocabularyKind = VocabularyKind::Severity;

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["low"],
            Self::Medium => &["medium", "moderate"],
            Self::High => &["high"],
            Self::Critical => &["critical"],
        }
    }
}

/// How close a deadline is, derived from whole days remaining.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UrgencyTier {
    /// Zero or fewer days left
    Overdue,
    /// Due tomorrow
    Critical,
    /// Two or three days left
    Urgent,
    /// Four to seven days left
    Soon,
    /// More than a week left
    Normal,
}

impl UrgencyTier {
    /// Maps days remaining onto a tier. Total over all integers; bounds are
    /// inclusive and checked from the most urgent tier down.
    #[must_use]
    pub const fn from_days(days_remaining: i64) -> Self {
        match days_remaining {
            i64::MIN..=0 => Self::Overdue,
            1 => Self::Critical,
            2..=3 => Self::Urgent,
            4..=7 => Self::Soon,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn palette(self) -> TierPalette {
        match self {
            Self::Overdue => TierPalette::new("#DC2626", "#FEE2E2", "#FCA5A5"),
            Self::Critical => TierPalette::new("#EA580C", "#FFEDD5", "#FDBA74"),
            Self::Urgent => TierPalette::new("#D97706", "#FEF3C7", "#FCD34D"),
            Self::Soon => TierPalette::new("#2563EB", "#DBEAFE", "#93C5FD"),
            Self::Normal => TierPalette::new("#16A34A", "#DCFCE7", "#86EFAC"),
        }
    }

    /// Whether a warning banner should be shown for this tier.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::Overdue | Self::Critical | Self::Urgent)
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Overdue,
            Self::Critical,
            Self::Urgent,
            Self::Soon,
            Self::Normal,
        ]
    }
}

/// Foreground, background and border colors for an urgency badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPalette {
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl TierPalette {
    #[must_use]
    pub const fn new(color: &'static str, background: &'static str, border: &'static str) -> Self {
        Self {
            color,
            background,
            border,
        }
    }
}

/// Result of classifying a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyClassification {
    pub tier: UrgencyTier,
    /// The input this classification was computed from.
    pub days_remaining: i64,
    pub color_key: &'static str,
    pub background_key: &'static str,
    pub border_key: &'static str,
    /// True for Overdue, Critical and Urgent.
    pub is_actionable: bool,
}

/// Display language for labels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// Vietnamese
    #[default]
    Vi,
    /// English
    En,
}

impl Locale {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Vi, Self::En]
    }
}
