use super::surface::{MapSurface, OverlayId};
use crate::config::OverlayStyle;
use crate::domain::{BoundaryPoint, MIN_POLYGON_POINTS};

/// One visual element drawn for the current points
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Marker {
        position: BoundaryPoint,
        label: String,
    },
    Polyline {
        path: Vec<BoundaryPoint>,
    },
    Polygon {
        ring: Vec<BoundaryPoint>,
    },
}

/// Declarative set of overlays for a point list
///
/// - one numbered marker per point (labels start at 1)
/// - a connecting line for exactly two points
/// - a filled polygon for three or more points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlaySet {
    overlays: Vec<Overlay>,
}

impl OverlaySet {
    pub fn for_points(points: &[BoundaryPoint]) -> Self {
        let mut overlays = Vec::with_capacity(points.len() + 1);

        // Shape first so the markers sit on top of it
        if points.len() >= MIN_POLYGON_POINTS {
            overlays.push(Overlay::Polygon {
                ring: points.to_vec(),
            });
        } else if points.len() == 2 {
            overlays.push(Overlay::Polyline {
                path: points.to_vec(),
            });
        }

        overlays.extend(points.iter().enumerate().map(|(i, &position)| {
            Overlay::Marker {
                position,
                label: (i + 1).to_string(),
            }
        }));

        Self { overlays }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

/// Applies overlay sets to a surface with a clear-and-redraw policy
///
/// Every render removes all overlays from the previous render before
/// adding the new set. No diffing is attempted.
#[derive(Debug, Default)]
pub struct Renderer {
    drawn: Vec<OverlayId>,
}

impl Renderer {
    pub fn render<M: MapSurface>(&mut self, surface: &mut M, set: &OverlaySet, style: &OverlayStyle) {
        self.clear(surface);

        for overlay in set.iter() {
            let id = match overlay {
                Overlay::Marker { position, label } => surface.add_marker(*position, label),
                Overlay::Polyline { path } => surface.add_polyline(path, style),
                Overlay::Polygon { ring } => surface.add_polygon(ring, style),
            };
            self.drawn.push(id);
        }
    }

    pub fn clear<M: MapSurface>(&mut self, surface: &mut M) {
        for id in self.drawn.drain(..) {
            surface.remove_overlay(id);
        }
    }

    /// Number of overlays currently on the surface
    pub fn drawn(&self) -> usize {
        self.drawn.len()
    }
}
