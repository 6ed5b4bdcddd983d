//! Field measurements backed by the `geo` crate.

use agri_ops_geo_models::Coordinate;
use geo::{Centroid, ChamberlainDuquetteArea, Coord, LineString, MultiPoint, Point, Polygon};

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Converts a coordinate sequence to a `geo` line string (x = longitude).
#[must_use]
pub fn to_line_string(points: &[Coordinate]) -> LineString<f64> {
    points.iter().copied().map(to_coord).collect()
}

/// Converts a ring to a `geo` polygon. The ring is closed if it is not
/// already.
#[must_use]
pub fn to_polygon(ring: &[Coordinate]) -> Polygon<f64> {
    Polygon::new(to_line_string(ring), Vec::new())
}

/// Spherical area of a field boundary in hectares.
///
/// Fewer than three points enclose nothing and return `0.0`.
#[must_use]
pub fn area_hectares(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    to_polygon(ring).chamberlain_duquette_unsigned_area() / SQUARE_METERS_PER_HECTARE
}

/// Planar centroid used to place a field's marker.
///
/// Rings of three or more points use the polygon centroid; shorter inputs
/// fall back to the mean of their points.
#[must_use]
pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
    let point = if points.len() >= 3 {
        to_polygon(points).centroid()
    } else {
        points
            .iter()
            .copied()
            .map(|c| Point::from(to_coord(c)))
            .collect::<MultiPoint<f64>>()
            .centroid()
    }?;

    Some(Coordinate::new(point.y(), point.x()))
}

const fn to_coord(coordinate: Coordinate) -> Coord<f64> {
    Coord {
        x: coordinate.longitude,
        y: coordinate.latitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lat: f64, lng: f64, size: f64) -> Vec<Coordinate> {
        vec![
            Coordinate::new(lat, lng),
            Coordinate::new(lat, lng + size),
            Coordinate::new(lat + size, lng + size),
            Coordinate::new(lat + size, lng),
            Coordinate::new(lat, lng),
        ]
    }

    #[test]
    fn polygon_uses_longitude_as_x() {
        let polygon = to_polygon(&[
            Coordinate::new(10.0, 105.0),
            Coordinate::new(10.0, 105.1),
            Coordinate::new(10.1, 105.1),
        ]);
        let first = polygon.exterior().0[0];
        assert!((first.x - 105.0).abs() < f64::EPSILON);
        assert!((first.y - 10.0).abs() < f64::EPSILON);
        assert!(polygon.exterior().is_closed());
    }

    #[test]
    fn equatorial_square_area() {
        // 0.01 degrees is roughly 1.11 km on each side at the equator.
        let area = area_hectares(&square(0.0, 105.0, 0.01));
        assert!((120.0..128.0).contains(&area), "area was {area}");
    }

    #[test]
    fn degenerate_rings_have_no_area() {
        assert!(area_hectares(&[]).abs() < f64::EPSILON);
        assert!(
            area_hectares(&[Coordinate::new(10.0, 105.0), Coordinate::new(10.1, 105.1)]).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn square_centroid_is_its_middle() {
        let c = centroid(&square(10.0, 105.0, 0.2)).unwrap();
        assert!((c.latitude - 10.1).abs() < 1e-9);
        assert!((c.longitude - 105.1).abs() < 1e-9);
    }

    #[test]
    fn short_inputs_use_point_mean() {
        assert!(centroid(&[]).is_none());

        let single = centroid(&[Coordinate::new(11.2, 106.5)]).unwrap();
        assert!((single.latitude - 11.2).abs() < 1e-9);

        let pair = centroid(&[Coordinate::new(10.0, 105.0), Coordinate::new(10.2, 105.4)]).unwrap();
        assert!((pair.latitude - 10.1).abs() < 1e-9);
        assert!((pair.longitude - 105.2).abs() < 1e-9);
    }
}
