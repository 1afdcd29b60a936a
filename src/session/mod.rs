//! Interaction state for one visualizer canvas.
//!
//! [`Session`] owns everything that changes while the user works: the vertex
//! list, the undo history, overlay flags and the pointer selection. All
//! geometry is delegated to [`crate::math`] and [`crate::analysis`].

mod config;
mod history;

pub use config::SessionConfig;
pub use history::{History, DEFAULT_HISTORY_CAPACITY};

use tracing::{debug, info, trace, warn};

use crate::analysis::{info_text, AngleSummary};
use crate::error::{ConfigError, Result};
use crate::geometry::Polygon;
use crate::input::{Command, InputEvent};
use crate::math::{AngleMode, Point2, Vector2};
use crate::render::{Frame, Overlays};

/// Explicit application state, mutated only through the event handlers below.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    polygon: Polygon,
    history: History,
    overlays: Overlays,
    angle_mode: AngleMode,
    selected: Option<usize>,
    dragging: bool,
    canvas_size: Option<Vector2>,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_valid_config(SessionConfig::default())
    }
}

impl Session {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SessionConfig) -> Self {
        Self {
            config,
            polygon: Polygon::new(),
            history: History::new(config.history_capacity),
            overlays: Overlays::default(),
            angle_mode: AngleMode::default(),
            selected: None,
            dragging: false,
            canvas_size: None,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn canvas_size(&self) -> Option<Vector2> {
        self.canvas_size
    }

    // --- Event dispatch ---

    /// Applies one input event. Returns `true` when the canvas needs a redraw.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(p) => self.pointer_down(p),
            InputEvent::PointerMove(p) => self.pointer_move(p),
            InputEvent::PointerUp(p) => self.pointer_up(p),
            InputEvent::Command(command) => self.apply(command),
            InputEvent::Resize { width, height } => match self.set_canvas_size(width, height) {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "ignoring canvas resize");
                    false
                }
            },
        }
    }

    /// Applies one button command. Returns `true` when the canvas needs a redraw.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            Command::Undo => self.undo(),
            Command::ToggleAngles => {
                self.toggle_angles();
                true
            }
            Command::ToggleSides => {
                self.toggle_sides();
                true
            }
            Command::ToggleGrid => {
                self.toggle_grid();
                true
            }
            Command::LoadExample => {
                self.load_example();
                true
            }
            Command::ToggleAngleMode => {
                self.toggle_angle_mode();
                true
            }
        }
    }

    // --- Pointer handling ---

    /// Grabs the first vertex near `point`, or appends `point` as a new vertex.
    ///
    /// Grabbing starts a drag and records nothing; appending pushes a snapshot
    /// and selects the new vertex.
    pub fn pointer_down(&mut self, point: Point2) -> bool {
        if let Some(index) = self.polygon.hit_test(&point, self.config.hit_radius) {
            debug!(index, "vertex selected");
            self.selected = Some(index);
            self.dragging = true;
            return true;
        }

        let index = self.polygon.push(point);
        self.history.push(&self.polygon);
        self.selected = Some(index);
        debug!(index, x = point.x, y = point.y, "vertex added");
        true
    }

    /// Moves the selected vertex while dragging.
    pub fn pointer_move(&mut self, point: Point2) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(index) = self.selected else {
            return false;
        };
        trace!(index, x = point.x, y = point.y, "dragging vertex");
        self.polygon.move_vertex(index, point)
    }

    /// Ends a drag and commits it to the history.
    pub fn pointer_up(&mut self, _point: Point2) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        self.history.push(&self.polygon);
        debug!(selected = ?self.selected, "drag committed");
        true
    }

    // --- Commands ---

    /// Clears the polygon, the history and the selection.
    pub fn reset(&mut self) {
        self.polygon.clear();
        self.history.clear();
        self.selected = None;
        self.dragging = false;
        info!("session reset");
    }

    /// Restores the snapshot preceding the newest one.
    ///
    /// Returns `false`, changing nothing, when there is at most one snapshot.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            debug!(snapshots = self.history.len(), "nothing to undo");
            return false;
        }
        self.history.pop();
        if let Some(previous) = self.history.latest() {
            self.polygon = previous.clone();
        }
        self.selected = None;
        self.dragging = false;
        debug!(vertices = self.polygon.len(), "undo");
        true
    }

    /// Flips the angle overlay and returns its new state.
    pub fn toggle_angles(&mut self) -> bool {
        self.overlays.angles = !self.overlays.angles;
        self.overlays.angles
    }

    /// Flips the side-length overlay and returns its new state.
    pub fn toggle_sides(&mut self) -> bool {
        self.overlays.sides = !self.overlays.sides;
        self.overlays.sides
    }

    /// Flips the grid overlay and returns its new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.overlays.grid = !self.overlays.grid;
        self.overlays.grid
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    /// Switches the angle convention and returns the new one.
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.angle_mode = self.angle_mode.toggled();
        debug!(mode = %self.angle_mode, "angle mode changed");
        self.angle_mode
    }

    /// Records the canvas size used to center the example and lay out the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<()> {
        let width = ConfigError::check_positive("canvas width", width)?;
        let height = ConfigError::check_positive("canvas height", height)?;
        self.canvas_size = Some(Vector2::new(width, height));
        Ok(())
    }

    /// Center of the canvas, or the configured fallback when the size is unknown.
    #[must_use]
    pub fn canvas_center(&self) -> Point2 {
        self.canvas_size
            .map_or(self.config.fallback_center, |size| Point2::from(size * 0.5))
    }

    /// Replaces the polygon with an equilateral triangle around the canvas
    /// center and records a snapshot.
    pub fn load_example(&mut self) {
        let c = self.canvas_center();
        let r = self.config.example_radius;
        let half_side = r * 3.0_f64.sqrt() / 2.0;

        self.polygon = Polygon::from_vertices(vec![
            Point2::new(c.x, c.y + r),
            Point2::new(c.x - half_side, c.y - r / 2.0),
            Point2::new(c.x + half_side, c.y - r / 2.0),
        ]);
        self.selected = None;
        self.dragging = false;
        self.history.push(&self.polygon);
        info!(x = c.x, y = c.y, radius = r, "example loaded");
    }

    // --- Output ---

    /// Angle statistics for the current polygon, if it is closed.
    #[must_use]
    pub fn summary(&self) -> Option<AngleSummary> {
        AngleSummary::compute(&self.polygon, self.angle_mode)
    }

    /// Info-panel text for the current polygon.
    #[must_use]
    pub fn info_text(&self) -> String {
        info_text(&self.polygon, self.angle_mode)
    }

    /// Builds the redraw request for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            polygon: self.polygon.clone(),
            selected: self.selected,
            angle_mode: self.angle_mode,
            overlays: self.overlays,
            summary: self.info_text(),
            canvas_size: self.canvas_size,
        }
    }
}
