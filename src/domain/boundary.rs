use serde::Serialize;

use super::BoundaryPoint;
use crate::geometry::{calculate_polygon_centroid, points_to_wkt};

/// Fewest vertices that make a polygon
pub const MIN_POLYGON_POINTS: usize = 3;

/// Derived boundary handed to the parent form
///
/// Only constructed through [`BoundaryData::from_points`], so `wkt` and
/// `center` always describe `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryData {
    points: Vec<BoundaryPoint>,
    wkt: String,
    center: BoundaryPoint,
}

impl BoundaryData {
    /// Returns `None` for fewer than three points
    pub fn from_points(points: &[BoundaryPoint]) -> Option<Self> {
        if points.len() < MIN_POLYGON_POINTS {
            return None;
        }

        let center = calculate_polygon_centroid(points)?;

        Some(Self {
            points: points.to_vec(),
            wkt: points_to_wkt(points),
            center,
        })
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    pub fn wkt(&self) -> &str {
        &self.wkt
    }

    pub fn center(&self) -> BoundaryPoint {
        self.center
    }
}
