//! Seams between the boundary editor and its host
//!
//! A host binds [`MapSurface`] to whatever map SDK it embeds and
//! [`Dialogs`] to its confirm/alert/toast primitives. The editor never
//! talks to a map provider directly.

use crate::config::OverlayStyle;
use crate::domain::BoundaryPoint;

/// Handle for an overlay added to a map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub u64);

/// Map widget operations the editor relies on
pub trait MapSurface {
    fn create_map(&mut self, center: BoundaryPoint, zoom: u8);
    fn destroy_map(&mut self);

    /// Add a point marker showing `label`
    fn add_marker(&mut self, position: BoundaryPoint, label: &str) -> OverlayId;
    fn add_polyline(&mut self, path: &[BoundaryPoint], style: &OverlayStyle) -> OverlayId;
    /// Add a filled polygon; `ring` is open (no closing repeat)
    fn add_polygon(&mut self, ring: &[BoundaryPoint], style: &OverlayStyle) -> OverlayId;
    fn remove_overlay(&mut self, id: OverlayId);

    /// Start forwarding map clicks to the editor's `map_click`
    fn register_click_listener(&mut self);
    fn unregister_click_listener(&mut self);
}

/// User-facing prompts
pub trait Dialogs {
    /// Blocking yes/no question. `false` means the user declined.
    fn confirm(&mut self, message: &str) -> bool;
    /// Blocking message, e.g. a failed validation
    fn alert(&mut self, message: &str);
    /// Non-blocking error notification
    fn notify_error(&mut self, message: &str);
}
