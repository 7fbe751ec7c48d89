//! Schema registry configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Whether registering an id that already exists replaces the stored schema
    /// instead of failing.
    #[serde(default)]
    pub allow_overwrite: bool,
}
