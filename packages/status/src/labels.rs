//! Localized display labels.
//!
//! Each builtin locale is a TOML file embedded with `include_str!` and
//! parsed on first use. Tables are keyed by the canonical `snake_case`
//! name of each value, one section per vocabulary, plus an `[urgency]`
//! section of message templates.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use agri_ops_status_models::{
    Locale, Priority, ReportType, Severity, TaskStatus, TaskType, UrgencyTier, Vocabulary,
    VocabularyKind,
};
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a label table from disk.
#[derive(Debug, thiserror::Error)]
pub enum LabelTableError {
    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid label table.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

static VI: LazyLock<LabelTable> =
    LazyLock::new(|| parse_builtin(Locale::Vi, include_str!("../labels/vi.toml")));

static EN: LazyLock<LabelTable> =
    LazyLock::new(|| parse_builtin(Locale::En, include_str!("../labels/en.toml")));

fn parse_builtin(locale: Locale, toml_str: &str) -> LabelTable {
    toml::de::from_str(toml_str)
        .unwrap_or_else(|e| panic!("Failed to parse builtin '{locale}' label table: {e}"))
}

/// Display labels for every vocabulary in one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelTable {
    pub status: BTreeMap<String, String>,
    pub priority: BTreeMap<String, String>,
    pub task_type: BTreeMap<String, String>,
    pub report_type: BTreeMap<String, String>,
    pub severity: BTreeMap<String, String>,
    /// Message templates per urgency tier; `{days}` is substituted.
    pub urgency: BTreeMap<String, String>,
}

impl LabelTable {
    /// Returns the embedded table for `locale`.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML fails to parse. The files are
    /// compile-time constants, so this indicates a development error and
    /// is caught by the tests below.
    #[must_use]
    pub fn builtin(locale: Locale) -> &'static Self {
        match locale {
            Locale::Vi => LazyLock::force(&VI),
            Locale::En => LazyLock::force(&EN),
        }
    }

    /// Parses a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid label table.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LabelTableError> {
        Ok(toml::de::from_str(toml_str)?)
    }

    /// Loads a custom table from a TOML file.
    ///
    /// Missing entries are allowed (lookups fall back to the canonical
    /// name) but are logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, LabelTableError> {
        let table = Self::from_toml_str(&std::fs::read_to_string(path)?)?;

        let missing = table.missing_keys();
        if !missing.is_empty() {
            log::warn!(
                "Label table {} has no entry for: {}",
                path.display(),
                missing.join(", ")
            );
        }

        Ok(table)
    }

    /// Returns the section for one vocabulary.
    #[must_use]
    pub const fn section(&self, kind: VocabularyKind) -> &BTreeMap<String, String> {
        match kind {
            VocabularyKind::Status => &self.status,
            VocabularyKind::Priority => &self.priority,
            VocabularyKind::TaskType => &self.task_type,
            VocabularyKind::ReportType => &self.report_type,
            VocabularyKind::Severity => &self.severity,
        }
    }

    /// Returns the display label for a canonical value, if this table has
    /// one.
    #[must_use]
    pub fn label<V: Vocabulary>(&self, value: V) -> Option<&str> {
        self.section(V::KIND).get(value.as_ref()).map(String::as_str)
    }

    /// Returns the message template for an urgency tier, if present.
    #[must_use]
    pub fn urgency_template(&self, tier: UrgencyTier) -> Option<&str> {
        self.urgency.get(tier.as_ref()).map(String::as_str)
    }

    /// Lists `section.key` for every canonical value without a label.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<String> {
        let mut missing = Vec::new();
        self.collect_missing::<TaskStatus>(&mut missing);
        self.collect_missing::<Priority>(&mut missing);
        self.collect_missing::<TaskType>(&mut missing);
        self.collect_missing::<ReportType>(&mut missing);
        self.collect_missing::<Severity>(&mut missing);

        for tier in UrgencyTier::all() {
            if self.urgency_template(*tier).is_none() {
                missing.push(format!("urgency.{}", tier.as_ref()));
            }
        }

        missing
    }

    fn collect_missing<V: Vocabulary>(&self, missing: &mut Vec<String>) {
        for value in V::all() {
            if self.label(*value).is_none() {
                missing.push(format!("{}.{}", section_name(V::KIND), value.as_ref()));
            }
        }
    }
}

const fn section_name(kind: VocabularyKind) -> &'static str {
    match kind {
        VocabularyKind::Status => "status",
        VocabularyKind::Priority => "priority",
        VocabularyKind::TaskType => "task_type",
        VocabularyKind::ReportType => "report_type",
        VocabularyKind::Severity => "severity",
    }
}
