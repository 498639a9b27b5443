//! # Solver Errors
//!
//! Error types for mean-line solving.

use thiserror::Error;

/// Errors that can occur while solving velocity triangles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A coefficient or dimension outside its structural domain.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl SolverError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

/// Rejects NaN and infinite inputs before any trigonometry runs.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), SolverError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::invalid_parameter(
            name,
            format!("must be finite: {}", value),
        ))
    }
}

/// Rejects zero, negative and non-finite inputs.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), SolverError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::invalid_parameter(
            name,
            format!("must be positive: {}", value),
        ))
    }
}
