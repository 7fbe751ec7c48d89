//! Dimension types and measure display formats.
//!
//! Both enums serialize lower-case via `#[serde(rename_all = "lowercase")]` so
//! documents match the dashboard's declared shape (`"categorical"`, `"currency"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DimensionType
// ---------------------------------------------------------------------------

/// Kind of analytical axis a dimension represents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DimensionType {
    #[default]
    Categorical,
    Time,
}

impl DimensionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Time => "time",
        }
    }

    /// Whether this dimension can drive a parallel-period comparison.
    #[must_use]
    pub const fn is_time(self) -> bool {
        matches!(self, Self::Time)
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MeasureFormat
// ---------------------------------------------------------------------------

/// How a measure's values are presented by KPI cards and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MeasureFormat {
    Currency,
    Percent,
    Number,
}

impl MeasureFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for MeasureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(Self::Currency),
            "percent" => Ok(Self::Percent),
            "number" => Ok(Self::Number),
            other => Err(CoreError::Validation(format!(
                "unknown measure format '{other}' (expected currency, percent or number)"
            ))),
        }
    }
}
