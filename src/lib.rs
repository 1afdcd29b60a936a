pub mod analysis;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod render;
pub mod session;
pub mod visualizer;

pub use error::{GeovisError, Result};
pub use visualizer::Visualizer;
