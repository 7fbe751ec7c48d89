use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DimensionType;

/// An analytical axis (store, shift, sale date) and the MDX expressions it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSpec {
    /// Declared name, original casing.
    pub name: String,
    /// Member-set expression, e.g. `[loja].[Todos].Children`.
    pub hierarchy: String,
    /// Reference expression, e.g. `[loja]`.
    pub dimension: String,
    #[serde(rename = "type", default)]
    pub kind: DimensionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Closed set of allowed member values. `None` means open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_period_hierarchy: Option<String>,
}

impl DimensionSpec {
    /// Label for filter panels, falling back to the declared name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Whether `value` may be used as a filter value for this dimension.
    #[must_use]
    pub fn allows_member(&self, value: &str) -> bool {
        self.members
            .as_ref()
            .is_none_or(|members| members.iter().any(|m| m == value))
    }
}
