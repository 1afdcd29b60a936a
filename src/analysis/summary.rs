use crate::geometry::{Polygon, PolygonKind};
use crate::math::AngleMode;

/// Allowed deviation (strict) of each opposite-angle sum from 180 degrees.
const CYCLIC_TOLERANCE: f64 = 1.0;

/// Heading and hint shown before any vertex exists.
pub const PLACEHOLDER: &str = "Geometry Visualizer\nTap the canvas to add vertices";

/// Sums of opposite angles of a quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OppositeAngles {
    /// `angle[0] + angle[2]`.
    pub first: f64,
    /// `angle[1] + angle[3]`.
    pub second: f64,
}

impl OppositeAngles {
    /// Returns `true` when both sums are within 1 degree of 180, i.e. the
    /// quadrilateral may be inscribed in a circle.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        (self.first - 180.0).abs() < CYCLIC_TOLERANCE
            && (self.second - 180.0).abs() < CYCLIC_TOLERANCE
    }
}

/// Angle statistics for a closed polygon (three or more vertices).
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSummary {
    pub kind: PolygonKind,
    pub mode: AngleMode,
    /// Per-vertex angles in `mode`.
    pub angles: Vec<f64>,
    pub angle_sum: f64,
    /// `(n - 2) * 180` for internal angles, `(n + 2) * 180` for external.
    pub expected_sum: f64,
    /// Present for quadrilaterals only.
    pub opposite: Option<OppositeAngles>,
}

impl AngleSummary {
    /// Computes the summary, or `None` if the polygon has fewer than three vertices.
    #[must_use]
    pub fn compute(polygon: &Polygon, mode: AngleMode) -> Option<Self> {
        let n = polygon.len();
        if n < 3 {
            return None;
        }

        let angles = polygon.angles(mode);
        let angle_sum = angles.iter().sum();
        let opposite = (n == 4).then(|| OppositeAngles {
            first: angles[0] + angles[2],
            second: angles[1] + angles[3],
        });

        Some(Self {
            kind: polygon.kind(),
            mode,
            angles,
            angle_sum,
            expected_sum: expected_angle_sum(n, mode),
            opposite,
        })
    }

    /// Number of vertices the summary was computed from.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.angles.len()
    }

    /// Returns `true` for a quadrilateral whose opposite angles each sum to ~180.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.opposite.is_some_and(|o| o.is_cyclic())
    }
}

/// Expected angle sum for an `n`-gon in `mode`.
///
/// Note the external formula is `(n + 2) * 180`: with the winding-folded
/// angles of [`crate::math::angle_at`], that is what a clockwise polygon sums to.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn expected_angle_sum(n: usize, mode: AngleMode) -> f64 {
    let n = n as f64;
    match mode {
        AngleMode::Internal => (n - 2.0) * 180.0,
        AngleMode::External => (n + 2.0) * 180.0,
    }
}

/// Builds the info-panel text for the current polygon.
#[must_use]
pub fn info_text(polygon: &Polygon, mode: AngleMode) -> String {
    let n = polygon.len();
    if n == 0 {
        return PLACEHOLDER.to_owned();
    }

    let Some(summary) = AngleSummary::compute(polygon, mode) else {
        return format!("Vertices: {n}\nAdd {} more vertex(es)", 3 - n);
    };

    let mut info = format!("{}\n", summary.kind);
    info.push_str(&format!(
        "Vertices: {n}, Angle sum: {:.1}°\n",
        summary.angle_sum
    ));
    info.push_str(&format!("Expected sum: {:.0}°\n", summary.expected_sum));

    if let Some(opposite) = summary.opposite {
        info.push_str(&format!(
            "∠1+∠3={:.1}°, ∠2+∠4={:.1}°\n",
            opposite.first, opposite.second
        ));
        if opposite.is_cyclic() {
            info.push_str("✓ Inscribed in a circle");
        }
    }

    info
}
