use thiserror::Error;

/// Top-level error type for the attached-eddy library.
#[derive(Debug, Error)]
pub enum AeddyError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to filament geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("lines are parallel")]
    Parallel,
}

/// Errors raised when a caller-supplied parameter violates a precondition.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    Invalid {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown symmetry plane {0:?}, expected one of xy, xz, yz")]
    UnknownPlane(String),
}

impl ParameterError {
    /// Checks that `value` is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] naming `parameter` otherwise.
    pub fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::Invalid {
                parameter,
                value,
                reason: "must be positive and finite",
            }
            .into())
        }
    }

    /// Checks that `value` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] naming `parameter` otherwise.
    pub fn require_finite(parameter: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::Invalid {
                parameter,
                value,
                reason: "must be finite",
            }
            .into())
        }
    }
}

/// Convenience type alias for results using [`AeddyError`].
pub type Result<T> = std::result::Result<T, AeddyError>;
