//! Schema builder configuration.

use dash_core::keys::DEFAULT_DATE_FIELD;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_date_field() -> String {
    DEFAULT_DATE_FIELD.to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuilderConfig {
    /// Date field used by `set_default_parallel_period` when none is named.
    #[serde(default = "default_date_field")]
    pub default_date_field: String,

    /// Log a warning when a schema is built without dimensions.
    #[serde(default = "default_true")]
    pub warn_on_empty_dimensions: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_date_field: default_date_field(),
            warn_on_empty_dimensions: true,
        }
    }
}

impl BuilderConfig {
    /// Reject values the builder cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `default_date_field` is blank or
    /// contains characters that would break the generated hierarchy expression.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = self.default_date_field.trim();
        if field.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "builder.default_date_field".into(),
                reason: "must not be empty".into(),
            });
        }
        if field.contains(['[', ']', '.']) {
            return Err(ConfigError::InvalidValue {
                field: "builder.default_date_field".into(),
                reason: format!("'{field}' must not contain '[', ']' or '.'"),
            });
        }
        Ok(())
    }
}
