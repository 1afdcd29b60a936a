use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::math::{AngleMode, Point2, Vector2};

use super::{Color, Frame, Palette};

/// A single drawing instruction in canvas coordinates (y up).
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point2,
        to: Point2,
        width: f64,
        color: Color,
    },
    /// A filled circle.
    Disc {
        center: Point2,
        radius: f64,
        color: Color,
    },
    /// A circular arc starting at `start` degrees (counter-clockwise from +x)
    /// and sweeping `sweep` degrees counter-clockwise.
    Arc {
        center: Point2,
        radius: f64,
        start: f64,
        sweep: f64,
        width: f64,
        color: Color,
    },
    /// Text centered on `position`.
    Label {
        position: Point2,
        text: String,
        color: Color,
    },
}

/// Sizes used when laying out a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub grid_spacing: f64,
    pub grid_width: f64,
    pub edge_width: f64,
    pub vertex_radius: f64,
    pub arc_radius: f64,
    pub arc_width: f64,
    /// Distance of the angle label from its vertex.
    pub angle_label_radius: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            grid_spacing: 40.0,
            grid_width: 0.5,
            edge_width: 2.5,
            vertex_radius: 10.0,
            arc_radius: 25.0,
            arc_width: 2.0,
            angle_label_radius: 42.0,
        }
    }
}

impl SceneStyle {
    /// Checks that every size is positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first non-positive size.
    pub fn validate(&self) -> Result<()> {
        ConfigError::check_positive("grid_spacing", self.grid_spacing)?;
        ConfigError::check_positive("grid_width", self.grid_width)?;
        ConfigError::check_positive("edge_width", self.edge_width)?;
        ConfigError::check_positive("vertex_radius", self.vertex_radius)?;
        ConfigError::check_positive("arc_radius", self.arc_radius)?;
        ConfigError::check_positive("arc_width", self.arc_width)?;
        ConfigError::check_positive("angle_label_radius", self.angle_label_radius)?;
        Ok(())
    }
}

/// A frame laid out as drawing primitives, in painting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Vector2,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Lays out `frame`: grid, edges, vertices, angle arcs, then side labels.
    #[must_use]
    pub fn build(frame: &Frame, style: &SceneStyle, palette: &Palette) -> Self {
        let size = frame.size();
        let mut primitives = Vec::new();

        if frame.overlays.grid {
            push_grid(&mut primitives, size, style, palette);
        }

        let vertices = frame.polygon.vertices();
        let n = vertices.len();

        if n >= 2 {
            for i in 0..n {
                primitives.push(Primitive::Line {
                    from: vertices[i],
                    to: vertices[(i + 1) % n],
                    width: style.edge_width,
                    color: palette.edge,
                });
            }
        }

        for (i, v) in vertices.iter().enumerate() {
            let color = if frame.selected == Some(i) {
                palette.vertex_selected
            } else {
                palette.vertex
            };
            primitives.push(Primitive::Disc {
                center: *v,
                radius: style.vertex_radius,
                color,
            });
        }

        if frame.overlays.angles && n >= 3 {
            let angles = frame.polygon.angles(frame.angle_mode);
            for (i, angle) in angles.iter().enumerate() {
                let prev = vertices[(i + n - 1) % n];
                let b = vertices[i];
                let next = vertices[(i + 1) % n];
                // Internal angles sweep from BA to BC; external ones from BC back to BA.
                let from = match frame.angle_mode {
                    AngleMode::Internal => prev,
                    AngleMode::External => next,
                };
                let start = heading_degrees(&b, &from);
                let color = palette.angle_color(i);

                primitives.push(Primitive::Arc {
                    center: b,
                    radius: style.arc_radius,
                    start,
                    sweep: *angle,
                    width: style.arc_width,
                    color,
                });

                let mid = (start + angle / 2.0).to_radians();
                primitives.push(Primitive::Label {
                    position: b + Vector2::new(mid.cos(), mid.sin()) * style.angle_label_radius,
                    text: format!("{angle:.1}°"),
                    color,
                });
            }
        }

        if frame.overlays.sides && n >= 2 {
            let lengths = frame.polygon.edge_lengths();
            let midpoints = frame.polygon.edge_midpoints();
            for (length, mid) in lengths.iter().zip(midpoints) {
                primitives.push(Primitive::Label {
                    position: mid,
                    text: format!("{length:.1}"),
                    color: palette.label,
                });
            }
        }

        Self {
            size,
            background: palette.background,
            primitives,
        }
    }
}

/// Direction from `origin` to `target` in degrees, counter-clockwise from +x.
fn heading_degrees(origin: &Point2, target: &Point2) -> f64 {
    let d = target - origin;
    d.y.atan2(d.x).to_degrees()
}

/// Upper bound on grid lines per axis, whatever the canvas size.
const MAX_GRID_LINES: usize = 1024;

/// Number of grid lines at `0, spacing, 2 * spacing, ...` strictly below `extent`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn grid_line_count(extent: f64, spacing: f64) -> usize {
    if spacing <= 0.0 || !spacing.is_finite() || extent <= 0.0 {
        return 0;
    }
    let count = (extent / spacing).ceil();
    if count >= MAX_GRID_LINES as f64 {
        MAX_GRID_LINES
    } else {
        count as usize
    }
}

#[allow(clippy::cast_precision_loss)]
fn push_grid(primitives: &mut Vec<Primitive>, size: Vector2, style: &SceneStyle, palette: &Palette) {
    let spacing = style.grid_spacing;
    let columns = grid_line_count(size.x.trunc(), spacing);
    let rows = grid_line_count(size.y.trunc(), spacing);
    if columns == 0 && rows == 0 {
        debug!(spacing, "grid skipped");
        return;
    }

    for i in 0..columns {
        let x = i as f64 * spacing;
        primitives.push(Primitive::Line {
            from: Point2::new(x, 0.0),
            to: Point2::new(x, size.y),
            width: style.grid_width,
            color: palette.grid,
        });
    }

    for i in 0..rows {
        let y = i as f64 * spacing;
        primitives.push(Primitive::Line {
            from: Point2::new(0.0, y),
            to: Point2::new(size.x, y),
            width: style.grid_width,
            color: palette.grid,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use crate::render::Overlays;

    fn frame(vertices: Vec<Point2>, overlays: Overlays) -> Frame {
        Frame {
            polygon: Polygon::from_vertices(vertices),
            selected: None,
            angle_mode: AngleMode::Internal,
            overlays,
            summary: String::new(),
            canvas_size: Some(Vector2::new(200.0, 120.0)),
        }
    }

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        ]
    }

    fn count(scene: &Scene, pred: impl Fn(&Primitive) -> bool) -> usize {
        scene.primitives.iter().filter(|&p| pred(p)).count()
    }

    #[test]
    fn empty_frame_draws_nothing() {
        let scene = Scene::build(
            &frame(Vec::new(), Overlays::default()),
            &SceneStyle::default(),
            &Palette::default(),
        );
        assert!(scene.primitives.is_empty());
        assert_eq!(scene.background, Palette::default().background);
    }

    #[test]
    fn grid_lines_every_spacing() {
        let overlays = Overlays {
            angles: false,
            sides: false,
            grid: true,
        };
        let scene = Scene::build(&frame(Vec::new(), overlays), &SceneStyle::default(), &Palette::default());
        // 200 wide: x = 0, 40, 80, 120, 160. 120 high: y = 0, 40, 80.
        assert_eq!(scene.primitives.len(), 8);
    }

    #[test]
    fn square_layout() {
        let palette = Palette::default();
        let mut f = frame(square(), Overlays::default());
        f.selected = Some(2);
        let scene = Scene::build(&f, &SceneStyle::default(), &palette);

        assert_eq!(count(&scene, |p| matches!(p, Primitive::Line { .. })), 4);
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Disc { .. })), 4);
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Arc { .. })), 4);
        // Four angle labels plus four side labels.
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Label { .. })), 8);

        let selected = count(&scene, |p| {
            matches!(p, Primitive::Disc { color, .. } if *color == palette.vertex_selected)
        });
        assert_eq!(selected, 1);

        assert!(scene.primitives.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "90.0°"
        )));
        assert!(scene.primitives.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "100.0"
        )));
    }

    #[test]
    fn internal_arc_starts_toward_predecessor() {
        let scene = Scene::build(
            &frame(square(), Overlays::default()),
            &SceneStyle::default(),
            &Palette::default(),
        );
        let arcs: Vec<_> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Arc { start, sweep, .. } => Some((*start, *sweep)),
                _ => None,
            })
            .collect();
        // Vertex 0 at the origin: predecessor (100, 0) lies at heading 0.
        assert!(arcs[0].0.abs() < 1e-9);
        assert!((arcs[0].1 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn overlays_off_hide_annotations() {
        let overlays = Overlays {
            angles: false,
            sides: false,
            grid: false,
        };
        let scene = Scene::build(&frame(square(), overlays), &SceneStyle::default(), &Palette::default());
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Arc { .. })), 0);
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Label { .. })), 0);
        assert_eq!(scene.primitives.len(), 8);
    }

    #[test]
    fn two_vertices_draw_edges_but_no_angles() {
        let scene = Scene::build(
            &frame(vec![Point2::new(0.0, 0.0), Point2::new(30.0, 40.0)], Overlays::default()),
            &SceneStyle::default(),
            &Palette::default(),
        );
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Line { .. })), 2);
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Arc { .. })), 0);
        assert_eq!(count(&scene, |p| matches!(p, Primitive::Label { .. })), 2);
    }

    #[test]
    fn unusable_grid_spacing_draws_no_grid() {
        let overlays = Overlays {
            angles: false,
            sides: false,
            grid: true,
        };
        for spacing in [0.0, -40.0, f64::NAN, f64::INFINITY] {
            let style = SceneStyle {
                grid_spacing: spacing,
                ..SceneStyle::default()
            };
            let scene = Scene::build(&frame(Vec::new(), overlays), &style, &Palette::default());
            assert!(scene.primitives.is_empty(), "spacing={spacing}");
        }
    }

    #[test]
    fn huge_canvas_grid_is_capped() {
        let overlays = Overlays {
            angles: false,
            sides: false,
            grid: true,
        };
        let mut f = frame(Vec::new(), overlays);
        f.canvas_size = Some(Vector2::new(1e12, 1e12));
        let scene = Scene::build(&f, &SceneStyle::default(), &Palette::default());
        assert_eq!(scene.primitives.len(), 2 * MAX_GRID_LINES);
    }

    #[test]
    fn grid_counts_partial_cells() {
        assert_eq!(grid_line_count(100.0, 40.0), 3);
        assert_eq!(grid_line_count(120.0, 40.0), 3);
        assert_eq!(grid_line_count(0.0, 40.0), 0);
    }

    #[test]
    fn style_validation() {
        assert!(SceneStyle::default().validate().is_ok());
        let style = SceneStyle {
            grid_spacing: 0.0,
            ..SceneStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
