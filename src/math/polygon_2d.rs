use super::{angle_at, AngleMode, Point2};

/// Computes the lengths of the closed polygon's edges, `P[i] -> P[(i + 1) % n]`.
///
/// Returns an empty vector for fewer than two points. For `n >= 2` the result
/// has exactly `n` entries, including the closing edge.
#[must_use]
pub fn edge_lengths(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .collect()
}

/// Computes the midpoints of the closed polygon's edges, in the same order as
/// [`edge_lengths`].
#[must_use]
pub fn edge_midpoints(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| nalgebra::center(&points[i], &points[(i + 1) % n]))
        .collect()
}

/// Computes the angle at every vertex from its predecessor and successor
/// (indices taken modulo `n`).
///
/// Returns an empty vector for fewer than three points.
#[must_use]
pub fn vertex_angles(points: &[Point2], mode: AngleMode) -> Vec<f64> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = &points[(i + n - 1) % n];
            let next = &points[(i + 1) % n];
            angle_at(prev, &points[i], next, mode)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// Clockwise square of side 100 (y up).
    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(0.0, 100.0), p(100.0, 100.0), p(100.0, 0.0)]
    }

    #[test]
    fn lengths_empty_and_single() {
        assert!(edge_lengths(&[]).is_empty());
        assert!(edge_lengths(&[p(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn lengths_two_points_include_return_edge() {
        let lengths = edge_lengths(&[p(0.0, 0.0), p(3.0, 4.0)]);
        assert_eq!(lengths.len(), 2);
        assert!((lengths[0] - 5.0).abs() < TOL);
        assert!((lengths[1] - 5.0).abs() < TOL);
    }

    #[test]
    fn lengths_closed_triangle() {
        let lengths = edge_lengths(&[p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)]);
        assert_eq!(lengths.len(), 3);
        assert!((lengths[0] - 3.0).abs() < TOL);
        assert!((lengths[1] - 4.0).abs() < TOL);
        assert!((lengths[2] - 5.0).abs() < TOL);
    }

    #[test]
    fn lengths_invariant_under_rotation() {
        let pts = vec![p(0.0, 0.0), p(10.0, 2.0), p(7.0, 9.0), p(-3.0, 6.0), p(-1.0, 1.0)];
        let mut base = edge_lengths(&pts);
        base.sort_by(f64::total_cmp);

        for shift in 1..pts.len() {
            let mut rotated = pts.clone();
            rotated.rotate_left(shift);
            let mut lengths = edge_lengths(&rotated);
            assert_eq!(lengths.len(), pts.len());
            assert!(lengths.iter().all(|l| *l >= 0.0));
            lengths.sort_by(f64::total_cmp);
            for (a, b) in base.iter().zip(&lengths) {
                assert!((a - b).abs() < TOL, "shift={shift}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn midpoints_of_square() {
        let mids = edge_midpoints(&square());
        assert_eq!(mids.len(), 4);
        assert!((mids[0].x).abs() < TOL && (mids[0].y - 50.0).abs() < TOL);
        assert!((mids[3].x - 50.0).abs() < TOL && (mids[3].y).abs() < TOL);
        assert!(edge_midpoints(&[p(0.0, 0.0)]).is_empty());
    }

    #[test]
    fn square_angles_are_right() {
        let angles = vertex_angles(&square(), AngleMode::Internal);
        assert_eq!(angles.len(), 4);
        for a in &angles {
            assert!((a - 90.0).abs() < TOL, "angle={a}");
        }
    }

    #[test]
    fn square_external_angles() {
        let angles = vertex_angles(&square(), AngleMode::External);
        for a in &angles {
            assert!((a - 270.0).abs() < TOL, "angle={a}");
        }
    }

    #[test]
    fn angles_need_three_points() {
        assert!(vertex_angles(&[p(0.0, 0.0), p(1.0, 0.0)], AngleMode::Internal).is_empty());
    }
}
