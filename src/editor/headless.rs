//! In-memory map surface and scripted dialogs
//!
//! Used by the `replay` command and by tests to run the editor without a
//! map SDK.

use std::collections::{BTreeMap, VecDeque};

use super::overlays::Overlay;
use super::surface::{Dialogs, MapSurface, OverlayId};
use crate::config::OverlayStyle;
use crate::domain::BoundaryPoint;

/// Operations performed on a [`RecordingSurface`], in order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    MapCreated { center: BoundaryPoint, zoom: u8 },
    MapDestroyed,
    MarkerAdded { id: OverlayId, label: String },
    PolylineAdded { id: OverlayId, points: usize },
    PolygonAdded { id: OverlayId, points: usize },
    OverlayRemoved(OverlayId),
    ClickListenerRegistered,
    ClickListenerUnregistered,
}

/// Map surface that records every call and tracks live overlays
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    live: BTreeMap<OverlayId, Overlay>,
    events: Vec<SurfaceEvent>,
    map_open: bool,
    listening: bool,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Drain the recorded events
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn live_overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.live.values()
    }

    pub fn live_markers(&self) -> usize {
        self.live
            .values()
            .filter(|o| matches!(o, Overlay::Marker { .. }))
            .count()
    }

    pub fn is_map_open(&self) -> bool {
        self.map_open
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    fn insert(&mut self, overlay: Overlay) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.live.insert(id, overlay);
        id
    }
}

impl MapSurface for RecordingSurface {
    fn create_map(&mut self, center: BoundaryPoint, zoom: u8) {
        self.map_open = true;
        self.events.push(SurfaceEvent::MapCreated { center, zoom });
    }

    fn destroy_map(&mut self) {
        self.map_open = false;
        self.live.clear();
        self.events.push(SurfaceEvent::MapDestroyed);
    }

    fn add_marker(&mut self, position: BoundaryPoint, label: &str) -> OverlayId {
        let id = self.insert(Overlay::Marker {
            position,
            label: label.to_string(),
        });
        self.events.push(SurfaceEvent::MarkerAdded {
            id,
            label: label.to_string(),
        });
        id
    }

    fn add_polyline(&mut self, path: &[BoundaryPoint], _style: &OverlayStyle) -> OverlayId {
        let id = self.insert(Overlay::Polyline {
            path: path.to_vec(),
        });
        self.events.push(SurfaceEvent::PolylineAdded {
            id,
            points: path.len(),
        });
        id
    }

    fn add_polygon(&mut self, ring: &[BoundaryPoint], _style: &OverlayStyle) -> OverlayId {
        let id = self.insert(Overlay::Polygon {
            ring: ring.to_vec(),
        });
        self.events.push(SurfaceEvent::PolygonAdded {
            id,
            points: ring.len(),
        });
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.live.remove(&id);
        self.events.push(SurfaceEvent::OverlayRemoved(id));
    }

    fn register_click_listener(&mut self) {
        self.listening = true;
        self.events.push(SurfaceEvent::ClickListenerRegistered);
    }

    fn unregister_click_listener(&mut self) {
        self.listening = false;
        self.events.push(SurfaceEvent::ClickListenerUnregistered);
    }
}

/// A prompt shown through [`ScriptedDialogs`]
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    Confirm { message: String, answer: bool },
    Alert(String),
    Error(String),
}

/// Dialogs that answer confirmations from a queue
///
/// When the queue is empty, `default_answer` is used.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<bool>,
    default_answer: bool,
    log: Vec<DialogEvent>,
}

impl ScriptedDialogs {
    pub fn answering(default_answer: bool) -> Self {
        Self {
            default_answer,
            ..Default::default()
        }
    }

    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    pub fn log(&self) -> &[DialogEvent] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<DialogEvent> {
        std::mem::take(&mut self.log)
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, message: &str) -> bool {
        let answer = self.answers.pop_front().unwrap_or(self.default_answer);
        self.log.push(DialogEvent::Confirm {
            message: message.to_string(),
            answer,
        });
        answer
    }

    fn alert(&mut self, message: &str) {
        self.log.push(DialogEvent::Alert(message.to_string()));
    }

    fn notify_error(&mut self, message: &str) {
        self.log.push(DialogEvent::Error(message.to_string()));
    }
}
