use serde::{Deserialize, Serialize};

/// A single boundary vertex in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub lat: f64,
    pub lng: f64,
}

impl BoundaryPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a geo coordinate (x = lng, y = lat)
    pub fn to_coord(self) -> geo::Coord<f64> {
        geo::coord! { x: self.lng, y: self.lat }
    }

    pub fn from_coord(coord: geo::Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_axis_order() {
        let p = BoundaryPoint::new(37.5, 127.0);
        let c = p.to_coord();
        assert_eq!(c.x, 127.0);
        assert_eq!(c.y, 37.5);
        assert_eq!(BoundaryPoint::from_coord(c), p);
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{"lat":37.5665,"lng":126.978}"#;
        let p: BoundaryPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p, BoundaryPoint::new(37.5665, 126.978));
        assert_eq!(serde_json::to_string(&p).unwrap(), json);
    }
}
