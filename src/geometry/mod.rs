pub mod bounds;
pub mod centroid;
pub mod codec;

pub use bounds::LatLngBounds;
pub use centroid::{area_weighted_centroid, calculate_polygon_centroid, geodesic_area_m2};
pub use codec::{point_to_wkt, points_to_wkt, wkt_to_point, wkt_to_points};
