//! Schema export and validation error types.

use dash_core::CoreError;
use thiserror::Error;

/// Errors from JSON Schema export and raw-document validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Build, registration, or lookup failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Draft document could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
