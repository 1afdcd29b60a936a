use crate::error::{ConfigError, Result};
use crate::math::Point2;

use super::history::DEFAULT_HISTORY_CAPACITY;

/// Parameters controlling session behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Maximum number of undo snapshots.
    pub history_capacity: usize,
    /// Half-size of the square box around a vertex that counts as a hit.
    pub hit_radius: f64,
    /// Circumradius of the example triangle.
    pub example_radius: f64,
    /// Center used for the example when the canvas size is unknown.
    pub fallback_center: Point2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            hit_radius: 20.0,
            example_radius: 100.0,
            fallback_center: Point2::new(400.0, 300.0),
        }
    }
}

impl SessionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `history_capacity` is zero or either radius is not positive.
    pub fn new(history_capacity: usize, hit_radius: f64, example_radius: f64) -> Result<Self> {
        let config = Self {
            history_capacity,
            hit_radius,
            example_radius,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `history_capacity` is zero or either radius is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::EmptyHistory.into());
        }
        ConfigError::check_positive("hit_radius", self.hit_radius)?;
        ConfigError::check_positive("example_radius", self.example_radius)?;
        Ok(())
    }

    /// Returns a copy with a different fallback center.
    #[must_use]
    pub fn with_fallback_center(mut self, center: Point2) -> Self {
        self.fallback_center = center;
        self
    }
}
