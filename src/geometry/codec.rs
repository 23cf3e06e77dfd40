//! WKT codec for hand-drawn boundaries and place coordinates
//!
//! Encoding writes `POLYGON((lng lat, ...))` with the ring explicitly closed.
//! Decoding goes through the `wkt` crate into `geo` types and drops the
//! closing vertex, so a decoded boundary has one point per distinct click.

use std::str::FromStr;

use geo::{Coord, Geometry};

use crate::domain::BoundaryPoint;
use crate::error::WktError;

/// Encode a ring of points as a closed WKT polygon
///
/// Coordinates are written X Y, i.e. `lng lat`. The first point is repeated
/// at the end. No winding or self-intersection checks are made.
pub fn points_to_wkt(points: &[BoundaryPoint]) -> String {
    let Some(first) = points.first() else {
        return "POLYGON EMPTY".to_string();
    };

    let ring: Vec<String> = points
        .iter()
        .chain(std::iter::once(first))
        .map(format_pair)
        .collect();

    format!("POLYGON(({}))", ring.join(", "))
}

/// Decode the exterior ring of a WKT polygon
///
/// One closing duplicate is dropped. An unclosed ring is closed by `geo`
/// before that happens, so both forms decode to the same points. Further
/// repeats are kept as ordinary vertices. Interior rings are ignored.
pub fn wkt_to_points(wkt: &str) -> Result<Vec<BoundaryPoint>, WktError> {
    let polygon = match parse_geometry(wkt)? {
        Geometry::Polygon(polygon) => polygon,
        other => {
            return Err(WktError::WrongGeometry {
                expected: "Polygon",
                found: geometry_name(&other),
            });
        }
    };

    let mut coords: Vec<Coord<f64>> = polygon.exterior().0.clone();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }

    if coords.is_empty() {
        return Err(WktError::Empty);
    }

    coords
        .into_iter()
        .map(|c| finite(BoundaryPoint::from_coord(c)))
        .collect()
}

/// Encode a single location as `POINT(lng lat)`
pub fn point_to_wkt(point: &BoundaryPoint) -> String {
    format!("POINT({})", format_pair(point))
}

/// Decode a `POINT(lng lat)` string
pub fn wkt_to_point(wkt: &str) -> Result<BoundaryPoint, WktError> {
    match parse_geometry(wkt)? {
        Geometry::Point(point) => finite(BoundaryPoint::from_coord(point.0)),
        other => Err(WktError::WrongGeometry {
            expected: "Point",
            found: geometry_name(&other),
        }),
    }
}

// Literals such as 1e400 parse to infinity
fn finite(point: BoundaryPoint) -> Result<BoundaryPoint, WktError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(WktError::NonFinite {
            lat: point.lat,
            lng: point.lng,
        })
    }
}

fn format_pair(point: &BoundaryPoint) -> String {
    format!("{} {}", point.lng, point.lat)
}

fn parse_geometry(wkt: &str) -> Result<Geometry<f64>, WktError> {
    let parsed = ::wkt::Wkt::<f64>::from_str(wkt.trim())
        .map_err(|e| WktError::Syntax(e.to_string()))?;

    Geometry::try_from(parsed).map_err(|e| WktError::Conversion(e.to_string()))
}

fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
