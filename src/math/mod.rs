pub mod angle_2d;
pub mod polygon_2d;

pub use angle_2d::{angle_at, AngleMode};
pub use polygon_2d::{edge_lengths, edge_midpoints, vertex_angles};

/// 2D point type in canvas coordinates (y up).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
