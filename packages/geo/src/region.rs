//! Map camera framing.

use agri_ops_geo_models::{BoundingRegion, Coordinate, RegionOptions};

/// Axis-aligned extent accumulated over a point set.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Extent {
    const fn from_point(point: Coordinate) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lng: point.longitude,
            max_lng: point.longitude,
        }
    }

    fn include(self, point: Coordinate) -> Self {
        Self {
            min_lat: self.min_lat.min(point.latitude),
            max_lat: self.max_lat.max(point.latitude),
            min_lng: self.min_lng.min(point.longitude),
            max_lng: self.max_lng.max(point.longitude),
        }
    }
}

/// Computes a padded viewport that contains every point.
///
/// An empty input returns `options.fallback`. Both spans are floored at
/// `options.minimum_span`, so a single point (or many identical points)
/// becomes the center of a minimum-size viewport.
#[must_use]
pub fn compute_region<I>(points: I, options: &RegionOptions) -> BoundingRegion
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return options.fallback;
    };

    let extent = points.fold(Extent::from_point(first), Extent::include);

    BoundingRegion {
        center_latitude: f64::midpoint(extent.min_lat, extent.max_lat),
        center_longitude: f64::midpoint(extent.min_lng, extent.max_lng),
        latitude_span: padded_span(extent.min_lat, extent.max_lat, options),
        longitude_span: padded_span(extent.min_lng, extent.max_lng, options),
    }
}

/// Frames a field boundary together with its spray route.
#[must_use]
pub fn region_for_geometry(
    boundary: &[Coordinate],
    route: &[Coordinate],
    options: &RegionOptions,
) -> BoundingRegion {
    compute_region(boundary.iter().chain(route).copied(), options)
}

fn padded_span(min: f64, max: f64, options: &RegionOptions) -> f64 {
    ((max - min) * options.padding_factor).max(options.minimum_span)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn empty_input_returns_fallback() {
        let options = RegionOptions::default();
        let region = compute_region(Vec::<Coordinate>::new(), &options);
        assert_eq!(region, options.fallback);
    }

    #[test]
    fn custom_fallback_is_honored() {
        let fallback = BoundingRegion {
            center_latitude: 21.0285,
            center_longitude: 105.8542,
            latitude_span: 1.0,
            longitude_span: 1.0,
        };
        let options = RegionOptions {
            fallback,
            ..RegionOptions::default()
        };
        assert_eq!(compute_region(Vec::<Coordinate>::new(), &options), fallback);
    }

    #[test]
    fn single_point_is_centered_at_minimum_span() {
        let options = RegionOptions::default();
        let region = compute_region([Coordinate::new(10.0, 20.0)], &options);
        assert_eq!(region.center(), Coordinate::new(10.0, 20.0));
        assert!(close(region.latitude_span, options.minimum_span));
        assert!(close(region.longitude_span, options.minimum_span));
    }

    #[test]
    fn repeated_point_respects_span_floor() {
        let options = RegionOptions {
            minimum_span: 0.05,
            ..RegionOptions::default()
        };
        let point = Coordinate::new(11.2, 106.5);
        let region = compute_region([point, point, point], &options);
        assert!(region.latitude_span >= 0.05);
        assert!(region.longitude_span >= 0.05);
    }

    #[test]
    fn pads_tight_bounding_box() {
        let options = RegionOptions::default();
        let points = [
            Coordinate::new(10.0, 105.0),
            Coordinate::new(10.2, 105.4),
            Coordinate::new(10.1, 105.1),
        ];
        let region = compute_region(points, &options);
        assert!(close(region.center_latitude, 10.1));
        assert!(close(region.center_longitude, 105.2));
        assert!(close(region.latitude_span, 0.2 * 1.5));
        assert!(close(region.longitude_span, 0.4 * 1.5));
    }

    #[test]
    fn floor_applies_per_axis() {
        let options = RegionOptions::default();
        // Points spread east-west only.
        let points = [Coordinate::new(10.0, 105.0), Coordinate::new(10.0, 105.5)];
        let region = compute_region(points, &options);
        assert!(close(region.latitude_span, options.minimum_span));
        assert!(close(region.longitude_span, 0.75));
    }

    #[test]
    fn frames_boundary_and_route_together() {
        let options = RegionOptions {
            padding_factor: 1.0,
            ..RegionOptions::default()
        };
        let boundary = [Coordinate::new(10.0, 105.0), Coordinate::new(10.1, 105.1)];
        let route = [Coordinate::new(10.3, 105.0)];
        let region = region_for_geometry(&boundary, &route, &options);
        assert!(close(region.latitude_span, 0.3));
        assert!(close(region.center_latitude, 10.15));

        let route_only = region_for_geometry(&[], &route, &options);
        assert!(close(route_only.center_latitude, 10.3));
    }
}
