//! `agri_ops.toml` configuration.
//!
//! Every section is optional; anything not set uses the library defaults.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use agri_ops_geo::RegionOptions;
use agri_ops_status::{LabelTable, LabelTableError, Locale};
use serde::Deserialize;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The custom label table could not be loaded.
    #[error("Label table error: {0}")]
    Labels(#[from] LabelTableError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Locale of the builtin label table.
    pub locale: Locale,
    /// Custom label table replacing the builtin one. Relative paths are
    /// resolved against the config file's directory.
    pub labels: Option<PathBuf>,
    /// Map framing parameters.
    pub region: RegionOptions,
}

impl AppConfig {
    /// Loads the config file, or returns defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let mut config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;

        if let Some(dir) = path.parent() {
            config.labels = config.labels.take().map(|labels| {
                if labels.is_relative() {
                    dir.join(labels)
                } else {
                    labels
                }
            });
        }

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::de::from_str(toml_str)?)
    }

    /// Switches to the builtin table for `locale`, dropping any custom
    /// table.
    pub fn override_locale(&mut self, locale: Locale) {
        if let Some(labels) = self.labels.take() {
            log::info!(
                "Locale {locale} replaces custom label table {}",
                labels.display()
            );
        }
        self.locale = locale;
    }

    /// Returns the label table to use: the custom file if configured,
    /// otherwise the builtin table for the locale.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured custom table cannot be loaded.
    pub fn label_table(&self) -> Result<Cow<'static, LabelTable>, ConfigError> {
        match &self.labels {
            Some(path) => Ok(Cow::Owned(LabelTable::load(path)?)),
            None => Ok(Cow::Borrowed(LabelTable::builtin(self.locale))),
        }
    }
}

#[cfg(test)]
mod tests {
    use agri_ops_geo::BoundingRegion;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.locale, Locale::Vi);
        assert_eq!(config.region, RegionOptions::default());
    }

    #[test]
    fn parses_full_config() {
        let config = AppConfig::from_toml_str(
            r#"
            locale = "en"
            labels = "labels/custom.toml"

            [region]
            minimum_span = 0.02
            padding_factor = 2.0

            [region.fallback]
            center_latitude = 21.0285
            center_longitude = 105.8542
            latitude_span = 1.0
            longitude_span = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.labels, Some(PathBuf::from("labels/custom.toml")));
        assert!((config.region.minimum_span - 0.02).abs() < f64::EPSILON);
        assert!((config.region.padding_factor - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            config.region.fallback,
            BoundingRegion {
                center_latitude: 21.0285,
                center_longitude: 105.8542,
                latitude_span: 1.0,
                longitude_span: 1.0,
            }
        );
    }

    #[test]
    fn fallback_accepts_camel_case_keys() {
        let config = AppConfig::from_toml_str(
            r"
            [region.fallback]
            centerLatitude = 21.0285
            centerLongitude = 105.8542
            latitudeSpan = 1.0
            longitudeSpan = 1.0
            ",
        )
        .unwrap();
        assert!((config.region.fallback.center_latitude - 21.0285).abs() < f64::EPSILON);
        assert!(
            (config.region.padding_factor - RegionOptions::DEFAULT_PADDING_FACTOR).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn locale_override_drops_custom_labels() {
        let mut config = AppConfig::from_toml_str(
            "locale = \"vi\"\nlabels = \"labels/custom.toml\"",
        )
        .unwrap();
        config.override_locale(Locale::En);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.labels, None);
        let table = config.label_table().unwrap();
        assert_eq!(
            table.label(agri_ops_status::TaskStatus::Cancelled),
            Some("Cancelled")
        );
    }

    #[test]
    fn partial_region_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[region]\npadding_factor = 1.2").unwrap();
        assert!((config.region.padding_factor - 1.2).abs() < f64::EPSILON);
        assert!(
            (config.region.minimum_span - RegionOptions::DEFAULT_MINIMUM_SPAN).abs()
                < f64::EPSILON
        );
        assert_eq!(config.region.fallback, BoundingRegion::MEKONG_DELTA);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(AppConfig::from_toml_str("locale = \"fr\"").is_err());
    }

    #[test]
    fn builtin_labels_follow_locale() {
        let config = AppConfig {
            locale: Locale::En,
            ..AppConfig::default()
        };
        let table = config.label_table().unwrap();
        assert_eq!(
            table.label(agri_ops_status::TaskStatus::Completed),
            Some("Completed")
        );
    }

    #[test]
    fn missing_label_file_is_an_error() {
        let config = AppConfig {
            labels: Some(PathBuf::from("/nonexistent/agri_ops_labels.toml")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.label_table(),
            Err(ConfigError::Labels(LabelTableError::Io(_)))
        ));
    }
}
