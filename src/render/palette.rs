use std::fmt;

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// Formats as `#rrggbb`, dropping alpha.
impl fmt::Display for Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Colors used to draw a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub vertex: Color,
    pub vertex_selected: Color,
    pub edge: Color,
    /// Cycled per vertex for angle arcs and labels.
    pub angles: Vec<Color>,
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.1, 0.1, 0.18),
            grid: Color::rgb(0.23, 0.23, 0.36),
            vertex: Color::rgb(0.3, 0.79, 0.94),
            vertex_selected: Color::rgb(0.97, 0.15, 0.52),
            edge: Color::rgb(1.0, 1.0, 1.0),
            angles: vec![
                Color::rgb(1.0, 0.35, 0.37),
                Color::rgb(0.35, 0.79, 0.15),
                Color::rgb(0.2, 0.63, 0.77),
                Color::rgb(0.95, 0.61, 0.07),
                Color::rgb(0.42, 0.3, 0.58),
            ],
            label: Color::rgb(0.9, 0.9, 0.9),
        }
    }
}

impl Palette {
    /// Color for the angle at vertex `index`; falls back to the label color
    /// when no angle colors are configured.
    #[must_use]
    pub fn angle_color(&self, index: usize) -> Color {
        if self.angles.is_empty() {
            return self.label;
        }
        self.angles[index % self.angles.len()]
    }
}
