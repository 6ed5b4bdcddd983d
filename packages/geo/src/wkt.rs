//! Lenient WKT coordinate extraction.
//!
//! Field boundaries and optimized spray routes arrive from the order API as
//! WKT strings. The prefix is not checked; the parser looks for the
//! innermost parenthesized group, so `POLYGON((...))`, `polygon ((...))` and
//! `SRID=4326;POLYGON((...))` all work. Anything that cannot be read yields
//! an empty sequence so the map simply draws nothing.

use std::sync::LazyLock;

use agri_ops_geo_models::Coordinate;
use regex::Regex;

/// Coordinates following the first `((`, up to the first `)`. This is the
/// outer ring; any holes or further polygons after it are ignored.
static POLYGON_RING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\(([^()]*)\)").expect("valid regex"));

/// First `(...)` group with no nested parentheses inside.
static COORDINATE_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid regex"));

/// Parses the outer ring of a WKT polygon.
///
/// Closure is not assumed: a ring whose last point repeats the first keeps
/// both points, and an open ring is returned as-is. Interior rings are
/// dropped; for a `MULTIPOLYGON` only the first polygon's outer ring is
/// returned.
#[must_use]
pub fn parse_polygon(wkt: Option<&str>) -> Vec<Coordinate> {
    parse_group(wkt, &POLYGON_RING_RE)
}

/// Parses a WKT line string (e.g. an optimized flight route).
#[must_use]
pub fn parse_line_string(wkt: Option<&str>) -> Vec<Coordinate> {
    parse_group(wkt, &COORDINATE_LIST_RE)
}

/// Parses a WKT point. Returns `None` unless the group holds exactly one
/// readable `lng lat` pair.
#[must_use]
pub fn parse_point(wkt: Option<&str>) -> Option<Coordinate> {
    match parse_group(wkt, &COORDINATE_LIST_RE).as_slice() {
        [single] => Some(*single),
        _ => None,
    }
}

fn parse_group(wkt: Option<&str>, group: &Regex) -> Vec<Coordinate> {
    let Some(wkt) = wkt.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    let Some(inner) = group.captures(wkt).and_then(|caps| caps.get(1)) else {
        log::debug!("No coordinate group found in WKT: {wkt}");
        return Vec::new();
    };

    inner
        .as_str()
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let coordinate = parse_pair(pair);
            if coordinate.is_none() {
                log::debug!("Skipping malformed WKT coordinate pair: {pair:?}");
            }
            coordinate
        })
        .collect()
}

/// Reads `"lng lat"` into a [`Coordinate`], swapping into latitude-first
/// order. Exactly two finite numbers are required.
fn parse_pair(pair: &str) -> Option<Coordinate> {
    let mut tokens = pair.split_whitespace();
    let longitude = tokens.next()?.parse::<f64>().ok()?;
    let latitude = tokens.next()?.parse::<f64>().ok()?;

    if tokens.next().is_some() || !longitude.is_finite() || !latitude.is_finite() {
        return None;
    }

    Some(Coordinate::new(latitude, longitude))
}
