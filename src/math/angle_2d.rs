use std::fmt;

use super::{Point2, Vector2};

/// Which convention [`angle_at`] reports.
///
/// The two modes always differ by `360 - θ`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    #[default]
    Internal,
    External,
}

impl AngleMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Internal => Self::External,
            Self::External => Self::Internal,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::External => f.write_str("external"),
        }
    }
}

/// 2D cross product `u.x * v.y - u.y * v.x`.
#[must_use]
pub fn cross_2d(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Computes the angle at vertex `b` formed by the rays `b -> a` and `b -> c`, in degrees.
///
/// The unsigned angle between the rays is folded by winding: when the cross
/// product `BA x BC` is negative the result becomes `360 - θ`, so for a
/// clockwise polygon (y up) [`AngleMode::Internal`] yields the interior angle
/// and a counter-clockwise polygon yields reflex values. [`AngleMode::External`]
/// returns `360` minus the internal value.
///
/// If either ray has zero length the result is exactly `0`.
#[must_use]
pub fn angle_at(a: &Point2, b: &Point2, c: &Point2, mode: AngleMode) -> f64 {
    let ba = a - b;
    let bc = c - b;

    let denom = ba.norm() * bc.norm();
    if denom <= 0.0 {
        return 0.0;
    }

    let cos_angle = (ba.dot(&bc) / denom).clamp(-1.0, 1.0);
    let mut angle = cos_angle.acos().to_degrees();

    if cross_2d(&ba, &bc) < 0.0 {
        angle = 360.0 - angle;
    }
    // Nearly collinear rays: acos can round to 0 while the cross is still negative.
    if angle >= 360.0 {
        angle -= 360.0;
    }

    match mode {
        AngleMode::Internal => angle,
        AngleMode::External => 360.0 - angle,
    }
}
