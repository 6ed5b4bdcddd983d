#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry helpers for spray-order maps.
//!
//! Turns the WKT field boundaries and flight routes attached to UAV orders
//! into coordinate sequences, frames them for the map camera, and measures
//! the sprayed area. Every function here is total: bad input degrades to an
//! empty sequence or a fallback region instead of an error.

pub mod measure;
pub mod region;
pub mod wkt;

pub use agri_ops_geo_models::{BoundingRegion, Coordinate, RegionOptions};
pub use measure::{area_hectares, centroid};
pub use region::{compute_region, region_for_geometry};
pub use wkt::{parse_line_string, parse_point, parse_polygon};
