pub mod boundary;
pub mod point;

pub use boundary::{BoundaryData, MIN_POLYGON_POINTS};
pub use point::BoundaryPoint;
