mod palette;
mod scene;
mod svg;

pub use palette::{Color, Palette};
pub use scene::{Primitive, Scene, SceneStyle};
pub use svg::SvgRenderer;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{AngleMode, Vector2};

/// Canvas size assumed when the host has not reported one yet.
pub const DEFAULT_CANVAS_SIZE: (f64, f64) = (800.0, 600.0);

/// Which overlays are drawn on top of the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlays {
    pub angles: bool,
    pub sides: bool,
    pub grid: bool,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            angles: true,
            sides: true,
            grid: false,
        }
    }
}

/// A redraw request: everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub polygon: Polygon,
    pub selected: Option<usize>,
    pub angle_mode: AngleMode,
    pub overlays: Overlays,
    /// Info-panel text.
    pub summary: String,
    /// Canvas size, if the host has reported one.
    pub canvas_size: Option<Vector2>,
}

impl Frame {
    /// Canvas size, falling back to [`DEFAULT_CANVAS_SIZE`].
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.canvas_size
            .unwrap_or_else(|| Vector2::new(DEFAULT_CANVAS_SIZE.0, DEFAULT_CANVAS_SIZE.1))
    }
}

/// A drawing backend, implemented by the toolkit binding.
pub trait Renderer {
    /// What one rendered frame produces.
    type Output;

    /// Paints `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn render(&mut self, frame: &Frame) -> Result<Self::Output>;
}
