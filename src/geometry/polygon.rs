use crate::math::{edge_lengths, edge_midpoints, vertex_angles, AngleMode, Point2};

use super::PolygonKind;

/// An implicitly closed polygon: vertices in insertion order, with the last
/// edge wrapping back to the first vertex.
///
/// No minimum vertex count is enforced. Analysis becomes meaningful at three
/// vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from vertices in order.
    #[must_use]
    pub fn from_vertices(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Point2> {
        self.vertices.get(index)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn push(&mut self, point: Point2) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Moves the vertex at `index` to `point`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn move_vertex(&mut self, index: usize, point: Point2) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = point;
                true
            }
            None => false,
        }
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Returns the index of the first vertex whose axis-aligned box of
    /// half-size `radius` contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: &Point2, radius: f64) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| (v.x - point.x).abs() < radius && (v.y - point.y).abs() < radius)
    }

    /// Edge lengths, closing edge included. Empty below two vertices.
    #[must_use]
    pub fn edge_lengths(&self) -> Vec<f64> {
        edge_lengths(&self.vertices)
    }

    /// Edge midpoints, in the same order as [`Polygon::edge_lengths`].
    #[must_use]
    pub fn edge_midpoints(&self) -> Vec<Point2> {
        edge_midpoints(&self.vertices)
    }

    /// Per-vertex angles in `mode`. Empty below three vertices.
    #[must_use]
    pub fn angles(&self, mode: AngleMode) -> Vec<f64> {
        vertex_angles(&self.vertices, mode)
    }

    /// Classifies the polygon by vertex count.
    #[must_use]
    pub fn kind(&self) -> PolygonKind {
        PolygonKind::classify(&self.vertices)
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl FromIterator<Point2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}
