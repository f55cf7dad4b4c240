//! Error types for scene construction and configuration loading.

use thiserror::Error;

/// Errors surfaced while building scenes or loading the host configuration.
///
/// Running scenes never fail: everything that can go wrong is caught when a
/// scene is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// A period or duration was not positive, a required pool was empty, a
    /// range was inverted, or a number was not finite.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration file could not be read, parsed or written.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Fail with [`SceneError::InvalidConfiguration`] unless `value` is finite and
/// strictly positive.
pub(crate) fn ensure_positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidConfiguration(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

/// Fail unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidConfiguration(format!(
            "{field} must be non-negative, got {value}"
        )))
    }
}
