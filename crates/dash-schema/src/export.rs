//! JSON Schema export and validation for schema documents.
//!
//! The JSON Schema is generated from `dash-core` types via [`schemars::schema_for!`]
//! and checked with `jsonschema`, for tooling that edits documents as raw JSON.

use dash_core::SchemaDocument;
use schemars::schema_for;

use crate::error::SchemaError;

/// JSON Schema describing a serialized [`SchemaDocument`].
///
/// # Errors
///
/// Returns `SchemaError::Generation` if the generated schema cannot be
/// converted to a JSON value.
pub fn document_json_schema() -> Result<serde_json::Value, SchemaError> {
    serde_json::to_value(schema_for!(SchemaDocument))
        .map_err(|e| SchemaError::Generation(format!("{e}")))
}

/// Validate raw JSON against the document schema.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` with one message per violation, or
/// `SchemaError::Generation` if the schema itself does not compile.
pub fn validate_document_json(instance: &serde_json::Value) -> Result<(), SchemaError> {
    let schema = document_json_schema()?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| SchemaError::Generation(format!("{e}")))?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed { errors })
    }
}

/// Validate raw JSON structurally, then parse it into a checked document.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` for shape violations, or
/// `SchemaError::Core` if mandatory fields are empty.
pub fn parse_document(instance: serde_json::Value) -> Result<SchemaDocument, SchemaError> {
    validate_document_json(&instance)?;
    Ok(SchemaDocument::from_json(instance)?)
}
