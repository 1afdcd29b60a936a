pub mod kind;
pub mod polygon;

pub use kind::PolygonKind;
pub use polygon::Polygon;
