#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate and map viewport types.
//!
//! These are the value types exchanged between the geometry parser, the
//! region calculator, and whatever renders the map. None of them are
//! persisted; they are rebuilt from API responses on every render.

use serde::{Deserialize, Serialize};

/// A WGS84 position.
///
/// Field order is latitude first, which is the reverse of WKT's
/// `lng lat` token order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and inside the WGS84
    /// latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A map viewport described by its center and the degrees it spans.
///
/// Serializes as camelCase for the map bridge; `snake_case` keys are also
/// accepted so config files can use one convention throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Latitude of the viewport center.
    #[serde(alias = "center_latitude")]
    pub center_latitude: f64,
    /// Longitude of the viewport center.
    #[serde(alias = "center_longitude")]
    pub center_longitude: f64,
    /// Vertical extent in degrees.
    #[serde(alias = "latitude_span")]
    pub latitude_span: f64,
    /// Horizontal extent in degrees.
    #[serde(alias = "longitude_span")]
    pub longitude_span: f64,
}

impl BoundingRegion {
    /// Default viewport when there is nothing to frame: the Mekong Delta
    /// rice belt around Can Tho.
    pub const MEKONG_DELTA: Self = Self {
        center_latitude: 10.0452,
        center_longitude: 105.7469,
        latitude_span: 0.5,
        longitude_span: 0.5,
    };

    /// Returns the viewport center as a [`Coordinate`].
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        Coordinate::new(self.center_latitude, self.center_longitude)
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::MEKONG_DELTA
    }
}

/// Parameters for framing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOptions {
    /// Smallest span (degrees) either axis may have. Keeps a single point
    /// or a set of coincident points from producing a zero-size viewport.
    pub minimum_span: f64,
    /// Multiplier applied to the tight bounding box so geometry does not
    /// touch the viewport edges.
    pub padding_factor: f64,
    /// Region returned when there are no points.
    pub fallback: BoundingRegion,
}

impl RegionOptions {
    pub const DEFAULT_MINIMUM_SPAN: f64 = 0.01;
    pub const DEFAULT_PADDING_FACTOR: f64 = 1.5;
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            minimum_span: Self::DEFAULT_MINIMUM_SPAN,
            padding_factor: Self::DEFAULT_PADDING_FACTOR,
            fallback: BoundingRegion::default(),
        }
    }
}
