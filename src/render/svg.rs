use std::fmt::Write as _;

use tracing::debug;

use crate::error::{RenderError, Result};
use crate::math::Point2;

use super::{Frame, Palette, Primitive, Renderer, Scene, SceneStyle};

/// Height reserved above the canvas for the info panel.
const PANEL_LINE_HEIGHT: f64 = 18.0;

/// Sweeps at or beyond this many degrees are drawn as full circles.
const FULL_TURN: f64 = 359.999;

/// Renders frames to standalone SVG documents.
///
/// The canvas is y-up; the document flips it so the picture looks the same.
/// The info-panel text is drawn as a block above the canvas.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    style: SceneStyle,
    palette: Palette,
}

impl SvgRenderer {
    /// Creates a renderer with custom sizes and colors.
    ///
    /// # Errors
    ///
    /// Returns an error if any size in `style` is not positive.
    pub fn new(style: SceneStyle, palette: Palette) -> Result<Self> {
        style.validate()?;
        Ok(Self { style, palette })
    }

    fn write_document(&self, scene: &Scene, summary: &str) -> std::result::Result<String, RenderError> {
        let lines: Vec<&str> = summary.lines().collect();
        #[allow(clippy::cast_precision_loss)]
        let panel = PANEL_LINE_HEIGHT * (lines.len() as f64 + 1.0);
        let (width, height) = (scene.size.x, scene.size.y);
        let flip = |p: &Point2| (p.x, panel + height - p.y);

        let mut out = String::new();
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<svg width="{width}" height="{total}" viewBox="0 0 {width} {total}" xmlns="http://www.w3.org/2000/svg">"#,
            total = panel + height,
        )?;
        writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width}" height="{total}" fill="{}" />"#,
            scene.background,
            total = panel + height,
        )?;

        for (i, line) in lines.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = PANEL_LINE_HEIGHT * (i as f64 + 1.0);
            writeln!(
                out,
                r#"  <text x="{:.3}" y="{y:.3}" fill="{}" font-family="sans-serif" font-size="14" text-anchor="middle">{}</text>"#,
                width / 2.0,
                self.palette.label,
                escape_text(line),
            )?;
        }

        for primitive in &scene.primitives {
            match primitive {
                Primitive::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    let (x1, y1) = flip(from);
                    let (x2, y2) = flip(to);
                    writeln!(
                        out,
                        r#"  <line x1="{x1:.3}" y1="{y1:.3}" x2="{x2:.3}" y2="{y2:.3}" stroke="{color}" stroke-width="{width}" />"#,
                    )?;
                }
                Primitive::Disc {
                    center,
                    radius,
                    color,
                } => {
                    let (cx, cy) = flip(center);
                    writeln!(
                        out,
                        r#"  <circle cx="{cx:.3}" cy="{cy:.3}" r="{radius:.3}" fill="{color}" />"#,
                    )?;
                }
                Primitive::Arc {
                    center,
                    radius,
                    start,
                    sweep,
                    width,
                    color,
                } => {
                    if *sweep <= 0.0 {
                        continue;
                    }
                    let (cx, cy) = flip(center);
                    if *sweep >= FULL_TURN {
                        writeln!(
                            out,
                            r#"  <circle cx="{cx:.3}" cy="{cy:.3}" r="{radius:.3}" fill="none" stroke="{color}" stroke-width="{width}" />"#,
                        )?;
                        continue;
                    }
                    let (s, e) = (start.to_radians(), (start + sweep).to_radians());
                    let (x0, y0) = (cx + radius * s.cos(), cy - radius * s.sin());
                    let (x1, y1) = (cx + radius * e.cos(), cy - radius * e.sin());
                    let large = u8::from(*sweep > 180.0);
                    // Counter-clockwise on a y-up canvas is the negative-angle direction in SVG.
                    writeln!(
                        out,
                        r#"  <path d="M {x0:.3} {y0:.3} A {radius:.3} {radius:.3} 0 {large} 0 {x1:.3} {y1:.3}" fill="none" stroke="{color}" stroke-width="{width}" />"#,
                    )?;
                }
                Primitive::Label {
                    position,
                    text,
                    color,
                } => {
                    let (x, y) = flip(position);
                    writeln!(
                        out,
                        r#"  <text x="{x:.3}" y="{y:.3}" fill="{color}" font-family="sans-serif" font-size="12" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                        escape_text(text),
                    )?;
                }
            }
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, frame: &Frame) -> Result<String> {
        let scene = Scene::build(frame, &self.style, &self.palette);
        let document = self.write_document(&scene, &frame.summary)?;
        debug!(
            primitives = scene.primitives.len(),
            bytes = document.len(),
            "svg frame rendered"
        );
        Ok(document)
    }
}

/// Escapes XML special characters in element text content.
///
/// Not suitable for single-quoted attribute values: `'` is left as is.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn empty_session_renders_placeholder() {
        let mut renderer = SvgRenderer::default();
        let svg = renderer.render(&Session::new().frame()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Geometry Visualizer"));
        assert!(svg.contains("Tap the canvas to add vertices"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn example_triangle_renders_shapes() {
        let mut session = Session::new();
        session.load_example();
        let svg = SvgRenderer::default().render(&session.frame()).unwrap();
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("Triangle"));
    }

    #[test]
    fn y_axis_is_flipped() {
        let mut session = Session::new();
        session.set_canvas_size(100.0, 100.0).unwrap();
        session.pointer_down(Point2::new(10.0, 90.0));
        let frame = session.frame();
        let svg = SvgRenderer::default().render(&frame).unwrap();
        // Panel: two summary lines plus one spare line of 18.
        let panel = PANEL_LINE_HEIGHT * 3.0;
        let expected = format!(r#"cx="10.000" cy="{:.3}""#, panel + 10.0);
        assert!(svg.contains(&expected), "{svg}");
    }

    #[test]
    fn invalid_style_is_rejected() {
        let style = SceneStyle {
            arc_radius: -1.0,
            ..SceneStyle::default()
        };
        assert!(SvgRenderer::new(style, Palette::default()).is_err());
    }

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(escape_text("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
