use geo::{Centroid, GeodesicArea, LineString, Polygon};

use crate::domain::{BoundaryPoint, MIN_POLYGON_POINTS};

/// Arithmetic mean of the vertices, used as a default map center
///
/// This is not an area-weighted centroid. It is only a reasonable center
/// for roughly convex, evenly sampled boundaries. Every input point is
/// counted, so a closing repeat passed in by the caller weighs twice.
///
/// # Returns
/// * `None` for an empty slice
pub fn calculate_polygon_centroid(points: &[BoundaryPoint]) -> Option<BoundaryPoint> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));

    Some(BoundaryPoint::new(lat_sum / n, lng_sum / n))
}

/// Area-weighted centroid of the ring, computed in planar lat/lng space
pub fn area_weighted_centroid(points: &[BoundaryPoint]) -> Option<BoundaryPoint> {
    to_polygon(points)
        .centroid()
        .map(|c| BoundaryPoint::from_coord(c.0))
}

/// Area enclosed by the ring on the WGS84 ellipsoid, in square meters
pub fn geodesic_area_m2(points: &[BoundaryPoint]) -> f64 {
    if points.len() < MIN_POLYGON_POINTS {
        return 0.0;
    }
    to_polygon(points).geodesic_area_unsigned()
}

fn to_polygon(points: &[BoundaryPoint]) -> Polygon<f64> {
    let ring: LineString<f64> = points.iter().map(|p| p.to_coord()).collect();
    Polygon::new(ring, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLngBounds;
    use approx::assert_relative_eq;

    fn p(lat: f64, lng: f64) -> BoundaryPoint {
        BoundaryPoint::new(lat, lng)
    }

    #[test]
    fn test_seoul_scenario_mean() {
        let points = [
            p(37.5665, 126.9780),
            p(37.5670, 126.9790),
            p(37.5660, 126.9795),
        ];
        let c = calculate_polygon_centroid(&points).unwrap();

        assert_relative_eq!(c.lat, 37.5665, epsilon = 1e-9);
        assert_relative_eq!(c.lng, 126.978_833_333, epsilon = 1e-6);
    }

    #[test]
    fn test_single_point() {
        let only = p(35.1796, 129.0756);
        assert_eq!(calculate_polygon_centroid(&[only]), Some(only));
        assert_eq!(calculate_polygon_centroid(&[]), None);
    }

    #[test]
    fn test_closing_repeat_is_counted() {
        let open = [p(0.0, 0.0), p(0.0, 3.0), p(3.0, 0.0)];
        let closed = [p(0.0, 0.0), p(0.0, 3.0), p(3.0, 0.0), p(0.0, 0.0)];

        let c_open = calculate_polygon_centroid(&open).unwrap();
        let c_closed = calculate_polygon_centroid(&closed).unwrap();

        assert_relative_eq!(c_open.lat, 1.0);
        assert_relative_eq!(c_closed.lat, 0.75);
    }

    #[test]
    fn test_centroid_within_bounds() {
        let rings: Vec<Vec<BoundaryPoint>> = vec![
            vec![p(37.56, 126.97), p(37.57, 126.99), p(37.55, 126.98)],
            vec![
                p(-12.0, -77.0),
                p(-12.5, -76.9),
                p(-12.2, -77.3),
                p(-12.1, -77.1),
                p(-12.1, -77.1),
            ],
            vec![p(64.1, -21.9), p(64.2, -21.8), p(64.15, -21.7), p(64.0, -22.0)],
        ];

        for ring in rings {
            let c = calculate_polygon_centroid(&ring).unwrap();
            let bounds = LatLngBounds::from_points(&ring).unwrap();
            assert!(bounds.contains(&c), "{:?} outside {:?}", c, bounds);
        }
    }

    #[test]
    fn test_area_weighted_differs_from_mean() {
        // Dense sampling on one edge pulls the mean but not the true centroid
        let ring = [
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(0.0, 2.0),
            p(0.0, 3.0),
            p(0.0, 4.0),
            p(4.0, 4.0),
            p(4.0, 0.0),
        ];

        let mean = calculate_polygon_centroid(&ring).unwrap();
        let exact = area_weighted_centroid(&ring).unwrap();

        assert_relative_eq!(exact.lat, 2.0, epsilon = 1e-9);
        assert_relative_eq!(exact.lng, 2.0, epsilon = 1e-9);
        assert!(mean.lat < 2.0);
    }

    #[test]
    fn test_geodesic_area() {
        assert_eq!(geodesic_area_m2(&[p(0.0, 0.0), p(1.0, 1.0)]), 0.0);

        let degree_square = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let area = geodesic_area_m2(&degree_square);
        assert!(area > 1.20e10 && area < 1.25e10, "area = {}", area);
    }
}
