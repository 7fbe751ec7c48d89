//! The schema document: one immutable description of an analytical cube.
//!
//! A document is produced by the builder in `dash-schema` and stored by the
//! registry. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`;
//! field names serialize in camelCase (`dataSource`, `filterConfigs`) to match
//! the declared dashboard shape.

mod category;
mod dimension;
mod filter;
mod measure;
mod parallel;

pub use category::CategorySpec;
pub use dimension::DimensionSpec;
pub use filter::FilterConfig;
pub use measure::MeasureSpec;
pub use parallel::{ParallelPeriodConfig, ParallelPeriodLevel};

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::keys::{fold_key, semantic_key};

/// Shape and naming of one analytical data cube.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// Stable slug, unique within a registry.
    pub id: String,
    /// Human label.
    #[serde(default)]
    pub name: String,
    /// Backing cube/table identifier.
    pub data_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub dimensions: BTreeMap<String, DimensionSpec>,
    #[serde(default)]
    pub measures: BTreeMap<String, MeasureSpec>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, CategorySpec>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filter_configs: BTreeMap<String, FilterConfig>,
    /// Dimension keys treated as mandatory filters across the whole schema.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub governance_filters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_period: Option<ParallelPeriodConfig>,
}

impl SchemaDocument {
    /// Check the fields a document cannot exist without.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` naming `id` or `dataSource`, checked in
    /// that order.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::MissingField { field: "id" });
        }
        if self.data_source.trim().is_empty() {
            return Err(CoreError::MissingField {
                field: "dataSource",
            });
        }
        Ok(())
    }

    /// Parse and validate a document from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the value does not have the document
    /// shape, or `CoreError::MissingField` if a mandatory field is empty.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        let doc: Self =
            serde_json::from_value(value).map_err(|e| CoreError::Validation(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Look up a dimension by key or any spelling of its name
    /// (`"LOJA"`, `"loja"`, `"Loja"`).
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&DimensionSpec> {
        lookup_normalized(&self.dimensions, name)
    }

    /// Look up a measure by key or any spelling of its name
    /// (`"VALOR_LIQUIDO"`, `"valorLiquido"`, `"valorliquido"`).
    #[must_use]
    pub fn measure(&self, name: &str) -> Option<&MeasureSpec> {
        lookup_normalized(&self.measures, name)
    }

    /// Categories are keyed by literal value code, so lookup is exact.
    #[must_use]
    pub fn category(&self, code: &str) -> Option<&CategorySpec> {
        self.categories.get(code)
    }

    #[must_use]
    pub fn filter_config(&self, name: &str) -> Option<&FilterConfig> {
        self.filter_configs.get(name)
    }

    /// Dimensions with `type = "time"`.
    pub fn time_dimensions(&self) -> impl Iterator<Item = (&String, &DimensionSpec)> {
        self.dimensions.iter().filter(|(_, d)| d.kind.is_time())
    }
}

/// Exact key, then the derived key, then any key with the same folded spelling.
fn lookup_normalized<'a, V>(map: &'a BTreeMap<String, V>, name: &str) -> Option<&'a V> {
    map.get(name)
        .or_else(|| map.get(&semantic_key(name)))
        .or_else(|| {
            let folded = fold_key(name);
            map.iter()
                .find(|(key, _)| fold_key(key) == folded)
                .map(|(_, value)| value)
        })
}
