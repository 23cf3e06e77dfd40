use thiserror::Error;

/// Failures decoding a WKT string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WktError {
    #[error("Invalid WKT syntax: {0}")]
    Syntax(String),
    #[error("WKT could not be converted to a geometry: {0}")]
    Conversion(String),
    #[error("Expected a {expected} but found a {found}")]
    WrongGeometry {
        expected: &'static str,
        found: &'static str,
    },
    #[error("WKT contains no coordinates")]
    Empty,
    #[error("Coordinate out of range: lat {lat}, lng {lng}")]
    NonFinite { lat: f64, lng: f64 },
}

/// Validation failures raised by the boundary editor and the forms built on it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    #[error("A boundary needs at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },
    #[error(transparent)]
    Wkt(#[from] WktError),
}
