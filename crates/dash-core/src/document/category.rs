use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Theming metadata for a literal value code (a shift, a sales channel).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategorySpec {
    pub label: String,
    /// CSS color, e.g. `#1f77b4`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}
