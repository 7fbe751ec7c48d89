use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keys::{same_key, semantic_key};

/// A named policy describing which dimensions a UI/query context may vary
/// and which it pins to a literal value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Dimension key → pinned literal value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fixed: BTreeMap<String, String>,
    /// Dimension keys this context allows to vary, in display order.
    #[serde(default)]
    pub accepts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_on_conflict: Option<bool>,
}

impl FilterConfig {
    /// Build a config that accepts the given dimensions, normalizing each key.
    #[must_use]
    pub fn accepting<I, S>(dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            accepts: dimensions
                .into_iter()
                .map(|d| semantic_key(d.as_ref()))
                .collect(),
            ..Self::default()
        }
    }

    /// Pin `dimension` to `value`.
    #[must_use]
    pub fn with_fixed(mut self, dimension: &str, value: impl Into<String>) -> Self {
        self.fixed.insert(semantic_key(dimension), value.into());
        self
    }

    #[must_use]
    pub const fn with_zero_on_conflict(mut self, zero_on_conflict: bool) -> Self {
        self.zero_on_conflict = Some(zero_on_conflict);
        self
    }

    /// Whether this context lets `dimension` vary. Any spelling of the key matches.
    #[must_use]
    pub fn accepts(&self, dimension: &str) -> bool {
        self.accepts.iter().any(|d| same_key(d, dimension))
    }

    /// The literal value `dimension` is pinned to, if any.
    #[must_use]
    pub fn pinned(&self, dimension: &str) -> Option<&str> {
        self.fixed
            .get(dimension)
            .or_else(|| self.fixed.get(&semantic_key(dimension)))
            .or_else(|| {
                self.fixed
                    .iter()
                    .find(|(key, _)| same_key(key, dimension))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// `zero_on_conflict` with its implicit default of `false`.
    #[must_use]
    pub fn zeroes_on_conflict(&self) -> bool {
        self.zero_on_conflict.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_is_case_normalizing() {
        let config = FilterConfig::accepting(["loja", "turno"]);
        assert_eq!(config.accepts, vec!["LOJA", "TURNO"]);
        assert!(config.accepts("Loja"));
        assert!(config.accepts("TURNO"));
        assert!(!config.accepts("canal"));
    }

    #[test]
    fn accepts_and_pins_any_spelling() {
        let config = FilterConfig::accepting(["dataVenda", "região"]).with_fixed("códigoFilial", "12");
        assert_eq!(config.accepts, vec!["DATA_VENDA", "REGIÃO"]);
        assert!(config.accepts("datavenda"));
        assert!(config.accepts("DATAVENDA"));
        assert!(config.accepts("Região"));
        assert!(!config.accepts("regiao"));
        assert_eq!(config.pinned("CODIGOFILIAL"), None);
        assert_eq!(config.pinned("códigofilial"), Some("12"));
        assert_eq!(config.pinned("CÓDIGO_FILIAL"), Some("12"));
    }

    #[test]
    fn pins_and_conflict_flag() {
        let config = FilterConfig::accepting(["loja"])
            .with_fixed("canal", "Delivery")
            .with_zero_on_conflict(true);
        assert_eq!(config.pinned("CANAL"), Some("Delivery"));
        assert_eq!(config.pinned("canal"), Some("Delivery"));
        assert_eq!(config.pinned("loja"), None);
        assert!(config.zeroes_on_conflict());
        assert!(!FilterConfig::default().zeroes_on_conflict());
    }

    #[test]
    fn serializes_camel_case_and_skips_empty_pins() {
        let config = FilterConfig::accepting(["loja"]).with_zero_on_conflict(false);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "accepts": ["LOJA"], "zeroOnConflict": false })
        );
    }
}
