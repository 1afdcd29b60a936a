use std::fmt;

use crate::math::{vertex_angles, AngleMode, Point2};

/// Angle every vertex of a triangle must be near to count as equilateral.
const EQUILATERAL_ANGLE: f64 = 60.0;

/// Allowed deviation (strict) from [`EQUILATERAL_ANGLE`], in degrees.
const EQUILATERAL_TOLERANCE: f64 = 5.0;

/// Classification of a polygon by vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonKind {
    /// Fewer than three vertices: an open path.
    NotClosed,
    Triangle {
        /// All three internal-mode angles are within 5 degrees of 60.
        ///
        /// This is an angle heuristic, not a side-length check, and it only
        /// fires for clockwise winding (counter-clockwise triangles report
        /// reflex angles).
        equilateral: bool,
    },
    Quadrilateral,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    /// Nine or more vertices.
    Gon(usize),
}

impl PolygonKind {
    /// Classifies the closed polygon through `points`.
    #[must_use]
    pub fn classify(points: &[Point2]) -> Self {
        match points.len() {
            0..=2 => Self::NotClosed,
            3 => Self::Triangle {
                equilateral: vertex_angles(points, AngleMode::Internal)
                    .iter()
                    .all(|a| (a - EQUILATERAL_ANGLE).abs() < EQUILATERAL_TOLERANCE),
            },
            4 => Self::Quadrilateral,
            5 => Self::Pentagon,
            6 => Self::Hexagon,
            7 => Self::Heptagon,
            8 => Self::Octagon,
            n => Self::Gon(n),
        }
    }

    /// Returns `true` unless the polygon is an open path.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::NotClosed)
    }

    /// Returns `true` for a triangle that passed the equilateral heuristic.
    #[must_use]
    pub fn is_equilateral(&self) -> bool {
        matches!(self, Self::Triangle { equilateral: true })
    }
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotClosed => f.write_str("Not closed"),
            Self::Triangle { equilateral } => {
                f.write_str("Triangle")?;
                if *equilateral {
                    f.write_str(" (equilateral)")?;
                }
                Ok(())
            }
            Self::Quadrilateral => f.write_str("Quadrilateral"),
            Self::Pentagon => f.write_str("Pentagon"),
            Self::Hexagon => f.write_str("Hexagon"),
            Self::Heptagon => f.write_str("Heptagon"),
            Self::Octagon => f.write_str("Octagon"),
            Self::Gon(n) => write!(f, "{n}-gon"),
        }
    }
}
