//! # Mesh Errors
//!
//! Error types for blade-row mesh generation.

use compressor_meanline::SolverError;
use thiserror::Error;

/// Errors that can occur during mesh generation and export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A dimension, count or fraction outside its structural domain
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Root and tip sections cannot be lofted together
    #[error("Profile mismatch: {message}")]
    ProfileMismatch { message: String },

    /// Rotation requested about a zero-length axis
    #[error("Degenerate rotation axis: {axis:?}")]
    DegenerateAxis { axis: [f64; 3] },

    /// Bounding box requested on a mesh without vertices
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// STL input could not be decoded
    #[error("Malformed STL: {message}")]
    MalformedStl { message: String },

    /// I/O failure while reading or writing a mesh file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates a profile mismatch error.
    pub fn profile_mismatch(message: impl Into<String>) -> Self {
        Self::ProfileMismatch {
            message: message.into(),
        }
    }

    /// Creates a malformed STL error.
    pub fn malformed_stl(message: impl Into<String>) -> Self {
        Self::MalformedStl {
            message: message.into(),
        }
    }
}

impl From<SolverError> for MeshError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidParameter { name, message } => {
                Self::InvalidParameter { name, message }
            }
        }
    }
}

/// Rejects zero, negative and non-finite lengths.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            name,
            format!("must be positive: {}", value),
        ))
    }
}

/// Rejects negative and non-finite values.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            name,
            format!("must be non-negative: {}", value),
        ))
    }
}
