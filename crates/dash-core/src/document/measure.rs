use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MeasureFormat;

/// A numeric, aggregatable quantity and its backend expression.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MeasureSpec {
    pub name: String,
    /// Backend expression, e.g. `[Measures].[valorliquido]`.
    pub mdx: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<MeasureFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

impl MeasureSpec {
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
