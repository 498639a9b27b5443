//! # Parameter Errors
//!
//! Error types for parameter records and stage files.

use compressor_meanline::SolverError;
use thiserror::Error;

/// Errors that can occur while converting or persisting parameter records.
#[derive(Debug, Error)]
pub enum ParamError {
    /// A required field is absent or blank
    #[error("Missing field `{field}` in {section} parameters")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    /// A field does not hold a number of the expected kind
    #[error("Field `{field}` is not a valid {expected}: `{value}`")]
    InvalidNumber {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Stage coefficients outside their domain
    #[error(transparent)]
    Coefficients(#[from] SolverError),

    /// Stage file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stage file is not valid JSON of the expected shape
    #[error("Stage file format error: {0}")]
    Json(#[from] serde_json::Error),
}
