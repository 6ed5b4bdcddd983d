#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the agri-ops geometry and status helpers.
//!
//! Runs the same parsing and classification the mobile screens use on
//! values copied out of API responses, printing the results as JSON. Handy
//! for checking what a spray order's boundary will look like on the map or
//! what label a new backend status will get.

mod config;

use std::path::PathBuf;

use agri_ops_geo::{
    Coordinate, area_hectares, centroid, parse_line_string, parse_polygon, region_for_geometry,
};
use agri_ops_status::{
    LabelTable, Locale, UrgencyClassification, VocabularyKind, classify_urgency, color_key,
    days_until, normalize_kind, recognizes, urgency_message,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "agri_ops", about = "Field geometry and status label tool")]
struct Cli {
    /// Path to an `agri_ops.toml` config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Label locale (`vi` or `en`); overrides the config file's locale and
    /// replaces any custom label table with the builtin one
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a WKT polygon (field boundary)
    Polygon {
        /// WKT text, e.g. "POLYGON((106.5 11.2, 106.6 11.3, ...))"
        wkt: String,
    },
    /// Parse a WKT line string (flight route)
    Line {
        /// WKT text, e.g. "LINESTRING(106.5 11.2, 106.6 11.3)"
        wkt: String,
    },
    /// Compute the map region framing a boundary and/or route
    Region {
        /// Field boundary as a WKT polygon
        #[arg(long)]
        polygon: Option<String>,
        /// Flight route as a WKT line string
        #[arg(long)]
        route: Option<String>,
        /// Override the configured minimum span (degrees)
        #[arg(long)]
        minimum_span: Option<f64>,
        /// Override the configured padding factor
        #[arg(long)]
        padding_factor: Option<f64>,
    },
    /// Classify a deadline
    Urgency {
        /// Whole days remaining (zero or negative means overdue)
        #[arg(
            allow_negative_numbers = true,
            required_unless_present = "deadline",
            conflicts_with = "deadline"
        )]
        days: Option<i64>,
        /// RFC 3339 deadline; days are counted in the deadline's own offset
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Normalize a raw backend code to its display label
    Label {
        /// Vocabulary: status, priority, task-type, report-type or severity
        #[arg(value_parser = parse_vocabulary)]
        vocabulary: VocabularyKind,
        /// Raw code as sent by the backend
        raw: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PolygonReport {
    coordinates: Vec<Coordinate>,
    area_hectares: f64,
    centroid: Option<Coordinate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UrgencyReport {
    #[serde(flatten)]
    classification: UrgencyClassification,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelReport {
    vocabulary: VocabularyKind,
    raw: String,
    label: String,
    recognized: bool,
    /// Only statuses, priorities and severities have a badge color.
    color_key: Option<&'static str>,
}

impl LabelReport {
    fn new(vocabulary: VocabularyKind, raw: String, labels: &LabelTable) -> Self {
        Self {
            vocabulary,
            label: normalize_kind(vocabulary, &raw, labels),
            recognized: recognizes(vocabulary, &raw),
            color_key: color_key(vocabulary, &raw),
            raw,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        config.override_locale(locale);
    }

    match cli.command {
        Commands::Polygon { wkt } => {
            let coordinates = parse_polygon(Some(&wkt));
            if coordinates.is_empty() {
                log::warn!("No coordinates found in polygon");
            }
            print_json(&PolygonReport {
                area_hectares: area_hectares(&coordinates),
                centroid: centroid(&coordinates),
                coordinates,
            })?;
        }
        Commands::Line { wkt } => {
            let coordinates = parse_line_string(Some(&wkt));
            if coordinates.is_empty() {
                log::warn!("No coordinates found in line string");
            }
            print_json(&coordinates)?;
        }
        Commands::Region {
            polygon,
            route,
            minimum_span,
            padding_factor,
        } => {
            let mut options = config.region;
            if let Some(minimum_span) = minimum_span {
                options.minimum_span = minimum_span;
            }
            if let Some(padding_factor) = padding_factor {
                options.padding_factor = padding_factor;
            }

            let boundary = parse_polygon(polygon.as_deref());
            let route = parse_line_string(route.as_deref());
            log::debug!(
                "Framing {} boundary points and {} route points",
                boundary.len(),
                route.len()
            );

            print_json(&region_for_geometry(&boundary, &route, &options))?;
        }
        Commands::Urgency { days, deadline } => {
            let days = match (days, deadline) {
                (Some(days), _) => days,
                (None, Some(deadline)) => {
                    let deadline = DateTime::parse_from_rfc3339(&deadline)?;
                    let now = Utc::now().with_timezone(deadline.offset());
                    days_until(&deadline, &now)
                }
                (None, None) => return Err("either DAYS or --deadline is required".into()),
            };

            let labels = config.label_table()?;
            let classification = classify_urgency(days);
            print_json(&UrgencyReport {
                message: urgency_message(&classification, &labels),
                classification,
            })?;
        }
        Commands::Label { vocabulary, raw } => {
            let labels = config.label_table()?;
            print_json(&LabelReport::new(vocabulary, raw, &labels))?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse()
        .map_err(|_| format!("unknown locale '{s}' (expected vi or en)"))
}

fn parse_vocabulary(s: &str) -> Result<VocabularyKind, String> {
    s.parse().map_err(|_| {
        format!("unknown vocabulary '{s}' (expected status, priority, task-type, report-type or severity)")
    })
}
