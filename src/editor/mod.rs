//! Click-to-draw boundary editor
//!
//! Turns map clicks into an ordered point list with undo/clear/complete
//! semantics. After every change to the points the editor recomputes the
//! derived [`BoundaryData`], hands it to the parent callback and redraws
//! its overlays on the [`MapSurface`].

pub mod headless;
pub mod overlays;
pub mod state;
pub mod surface;

pub use headless::{DialogEvent, RecordingSurface, ScriptedDialogs, SurfaceEvent};
pub use overlays::{Overlay, OverlaySet, Renderer};
pub use state::EditorState;
pub use surface::{Dialogs, MapSurface, OverlayId};

use tracing::{debug, warn};

use crate::config::{FileConfig, Messages, OverlayStyle};
use crate::domain::{BoundaryData, BoundaryPoint, MIN_POLYGON_POINTS};
use crate::error::{BoundaryError, WktError};
use crate::geometry::wkt_to_points;

/// Receives the derived boundary after every points change
pub type BoundaryCallback = Box<dyn FnMut(Option<&BoundaryData>)>;

/// Mount-time inputs for [`BoundaryEditor`]
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub initial_center: BoundaryPoint,
    /// Existing boundary as WKT, decoded once at mount
    pub initial_boundary: Option<String>,
    /// Suppresses click handling
    pub disabled: bool,
    pub zoom: u8,
    pub style: OverlayStyle,
    pub messages: Messages,
}

impl EditorOptions {
    pub fn new(initial_center: BoundaryPoint) -> Self {
        let config = FileConfig::default();
        Self {
            initial_center,
            initial_boundary: None,
            disabled: false,
            zoom: config.editor.zoom,
            style: config.style,
            messages: config.messages,
        }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        Self {
            initial_center: config.editor.center(),
            initial_boundary: None,
            disabled: false,
            zoom: config.editor.zoom,
            style: config.style.clone(),
            messages: config.messages.clone(),
        }
    }

    pub fn with_initial_boundary(mut self, wkt: impl Into<String>) -> Self {
        self.initial_boundary = Some(wkt.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub struct BoundaryEditor<M: MapSurface, D: Dialogs> {
    surface: M,
    dialogs: D,
    on_change: BoundaryCallback,
    style: OverlayStyle,
    messages: Messages,
    renderer: Renderer,
    state: EditorState,
    points: Vec<BoundaryPoint>,
    data: Option<BoundaryData>,
    disabled: bool,
    listening: bool,
}

impl<M: MapSurface, D: Dialogs> BoundaryEditor<M, D> {
    /// Create the map, seed points from `initial_boundary` and emit once
    ///
    /// A malformed initial boundary is reported through
    /// [`Dialogs::notify_error`] and the editor starts empty.
    pub fn mount(
        options: EditorOptions,
        surface: M,
        dialogs: D,
        on_change: impl FnMut(Option<&BoundaryData>) + 'static,
    ) -> Self {
        let mut editor = Self {
            surface,
            dialogs,
            on_change: Box::new(on_change),
            style: options.style,
            messages: options.messages,
            renderer: Renderer::default(),
            state: EditorState::Idle,
            points: Vec::new(),
            data: None,
            disabled: options.disabled,
            listening: false,
        };

        editor
            .surface
            .create_map(options.initial_center, options.zoom);
        if !editor.disabled {
            editor.listen(true);
        }

        if let Some(wkt) = options.initial_boundary.as_deref() {
            editor.points = editor.decode_seed(wkt).unwrap_or_default();
        }
        editor.points_changed();

        editor
    }

    /// Begin a new drawing, discarding existing points after confirmation
    ///
    /// # Returns
    /// * `false` if the editor is disabled or the user declined
    pub fn start_drawing(&mut self) -> bool {
        if self.disabled {
            return false;
        }

        if !self.points.is_empty() {
            let message = self.messages.confirm_restart.clone();
            if !self.dialogs.confirm(&message) {
                return false;
            }
            self.points.clear();
            self.points_changed();
        }

        self.state = EditorState::Drawing;
        debug!("boundary drawing started");
        true
    }

    /// Append a clicked point while drawing
    ///
    /// # Returns
    /// * `true` if the point was added
    pub fn map_click(&mut self, point: BoundaryPoint) -> bool {
        if self.disabled || !self.state.is_drawing() {
            return false;
        }
        if !point.is_finite() {
            warn!(lat = point.lat, lng = point.lng, "ignoring non-finite map click");
            return false;
        }

        self.points.push(point);
        debug!(count = self.points.len(), "boundary point added");
        self.points_changed();
        true
    }

    /// Remove the last point; no-op when there are none
    pub fn undo(&mut self) -> Option<BoundaryPoint> {
        let removed = self.points.pop()?;
        self.points_changed();
        Some(removed)
    }

    /// Remove every point after confirmation and stop drawing
    ///
    /// # Returns
    /// * `false` if the user declined; nothing changes in that case
    pub fn clear(&mut self) -> bool {
        if !self.points.is_empty() {
            let message = self.messages.confirm_clear.clone();
            if !self.dialogs.confirm(&message) {
                return false;
            }
            self.points.clear();
            self.points_changed();
        }

        self.state = EditorState::Idle;
        debug!("boundary cleared");
        true
    }

    /// Finish drawing
    ///
    /// Fewer than three points is rejected with a blocking alert and the
    /// state is left unchanged.
    pub fn complete(&mut self) -> Result<BoundaryData, BoundaryError> {
        if self.points.len() < MIN_POLYGON_POINTS {
            let message = self.messages.too_few_points.clone();
            self.dialogs.alert(&message);
            return Err(BoundaryError::TooFewPoints {
                required: MIN_POLYGON_POINTS,
                actual: self.points.len(),
            });
        }

        let data = self.data.clone().ok_or(BoundaryError::TooFewPoints {
            required: MIN_POLYGON_POINTS,
            actual: self.points.len(),
        })?;
        self.state = EditorState::Idle;
        debug!(wkt = data.wkt(), "boundary completed");
        Ok(data)
    }

    /// Stop drawing and keep the points
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.listen(!disabled);
    }

    /// Tear down overlays, the click listener and the map
    pub fn unmount(mut self) -> (M, D) {
        self.listen(false);
        self.renderer.clear(&mut self.surface);
        self.surface.destroy_map();
        (self.surface, self.dialogs)
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// Current boundary, `None` below three points
    pub fn boundary(&self) -> Option<&BoundaryData> {
        self.data.as_ref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    /// Mutable access for hosts that need to inspect or drain the surface.
    /// Overlays the editor added must not be removed through it.
    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    fn decode_seed(&mut self, wkt: &str) -> Result<Vec<BoundaryPoint>, WktError> {
        wkt_to_points(wkt).inspect_err(|e| {
            warn!(error = %e, "failed to decode boundary, starting empty");
            let message = self.messages.invalid_boundary.clone();
            self.dialogs.notify_error(&message);
        })
    }

    fn listen(&mut self, enabled: bool) {
        if enabled == self.listening {
            return;
        }
        if enabled {
            self.surface.register_click_listener();
        } else {
            self.surface.unregister_click_listener();
        }
        self.listening = enabled;
    }

    fn points_changed(&mut self) {
        self.data = BoundaryData::from_points(&self.points);
        (self.on_change)(self.data.as_ref());
        self.renderer.render(
            &mut self.surface,
            &OverlaySet::for_points(&self.points),
            &self.style,
        );
    }
}
