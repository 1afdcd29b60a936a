use thiserror::Error;

/// Top-level error type for the geovis crate.
///
/// The geometry engine itself is total and never produces one of these;
/// only configuration and rendering can fail.
#[derive(Debug, Error)]
pub enum GeovisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while validating session or scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("history capacity must be at least 1")]
    EmptyHistory,
}

impl ConfigError {
    /// Fails unless `value` is a positive, finite number.
    pub(crate) fn check_positive(parameter: &'static str, value: f64) -> Result<f64> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonPositive { parameter, value }.into())
        }
    }
}

/// Errors raised by a renderer backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("render failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GeovisError`].
pub type Result<T> = std::result::Result<T, GeovisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::NonPositive {
            parameter: "hit_radius",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "hit_radius must be positive, got -1");
        assert_eq!(
            ConfigError::EmptyHistory.to_string(),
            "history capacity must be at least 1"
        );
    }

    #[test]
    fn nested_errors_convert() {
        let err: GeovisError = ConfigError::EmptyHistory.into();
        assert!(matches!(err, GeovisError::Config(_)));

        let err: GeovisError = RenderError::from(std::fmt::Error).into();
        assert!(matches!(err, GeovisError::Render(RenderError::Format(_))));
    }
}
