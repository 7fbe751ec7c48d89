//! Cross-cutting error types for dash schemas.
//!
//! Crate-specific failures (JSON Schema validation, configuration) live in
//! their own crates. Every variant here names the field, id, or key involved.

use thiserror::Error;

/// Errors raised while building, registering, or resolving schema documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A mandatory schema field was absent or empty at build time.
    #[error("Schema is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Lookup returned no result.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A schema id was registered twice while overwrite is disabled.
    #[error("Schema '{id}' is already registered")]
    AlreadyRegistered { id: String },

    /// Document failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    #[must_use]
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = CoreError::MissingField { field: "dataSource" };
        assert_eq!(err.to_string(), "Schema is missing required field 'dataSource'");

        let err = CoreError::not_found("dimension", "TURNO");
        assert_eq!(err.to_string(), "dimension not found: TURNO");

        let err = CoreError::AlreadyRegistered { id: "vendas".into() };
        assert!(err.to_string().contains("already registered"));
        assert!(err.to_string().contains("vendas"));
    }
}
