use crate::domain::BoundaryPoint;

/// Lat/lng bounding box of a set of boundary points
#[derive(Debug, Clone, PartialEq)]
pub struct LatLngBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl LatLngBounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[BoundaryPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    pub fn contains(&self, point: &BoundaryPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    /// Span in degrees as (lat, lng)
    pub fn span(&self) -> (f64, f64) {
        (self.max_lat - self.min_lat, self.max_lng - self.min_lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = [
            BoundaryPoint::new(37.0, 127.0),
            BoundaryPoint::new(38.0, 126.5),
            BoundaryPoint::new(37.5, 127.25),
        ];
        let bounds = LatLngBounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_lat, 37.0);
        assert_eq!(bounds.max_lat, 38.0);
        assert_eq!(bounds.min_lng, 126.5);
        assert_eq!(bounds.max_lng, 127.25);
        assert_eq!(bounds.span(), (1.0, 0.75));
        assert!(bounds.contains(&BoundaryPoint::new(37.5, 127.0)));
        assert!(!bounds.contains(&BoundaryPoint::new(36.9, 127.0)));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(LatLngBounds::from_points(&[]).is_none());
    }
}
