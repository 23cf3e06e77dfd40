//! Payload the sub-building create/edit forms send to the backend
//!
//! The REST client itself lives outside this crate. The form only needs a
//! validated WKT boundary and the center derived from it.

use serde::{Deserialize, Serialize};

use crate::domain::{BoundaryData, MIN_POLYGON_POINTS};
use crate::error::BoundaryError;
use crate::geometry::wkt_to_points;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundarySubmission {
    pub boundary_wkt: String,
    pub center_lat: f64,
    pub center_lng: f64,
}

impl BoundarySubmission {
    /// Build from the editor's latest boundary
    ///
    /// `None` means the user has not drawn a polygon yet. That is rejected as
    /// too few points and nothing may be persisted.
    pub fn from_boundary(boundary: Option<&BoundaryData>) -> Result<Self, BoundaryError> {
        let data = boundary.ok_or(BoundaryError::TooFewPoints {
            required: MIN_POLYGON_POINTS,
            actual: 0,
        })?;
        let center = data.center();

        Ok(Self {
            boundary_wkt: data.wkt().to_string(),
            center_lat: center.lat,
            center_lng: center.lng,
        })
    }

    /// Re-validate a stored WKT boundary, e.g. when an edit form is saved
    /// without redrawing
    ///
    /// The WKT is normalised through the codec.
    pub fn from_wkt(wkt: &str) -> Result<Self, BoundaryError> {
        let points = wkt_to_points(wkt)?;
        let data = BoundaryData::from_points(&points).ok_or(BoundaryError::TooFewPoints {
            required: MIN_POLYGON_POINTS,
            actual: points.len(),
        })?;
        Self::from_boundary(Some(&data))
    }
}
