//! # dash-config
//!
//! Layered configuration for dash schema builders and registries using figment.
//!
//! Loading is optional and only happens when [`DashConfig::load`] (or
//! [`DashConfig::load_with_dotenv`]) is called. Nothing in `dash-schema` reads
//! files or the environment on its own: `SchemaBuilder::new` and
//! `SchemaRegistry::new` use [`BuilderConfig::default`] and
//! [`RegistryConfig::default`], and a loaded config only takes effect when
//! passed to `SchemaBuilder::with_config` or `SchemaRegistry::from_config`.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DASH_*` prefix, `__` as separator)
//! 2. Project-level `.dash/config.toml`
//! 3. User-level `~/.config/dash/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `DASH_REGISTRY__ALLOW_OVERWRITE` -> `registry.allow_overwrite`,
//! `DASH_BUILDER__DEFAULT_DATE_FIELD` -> `builder.default_date_field`.
//!
//! # Usage
//!
//! ```no_run
//! use dash_config::DashConfig;
//!
//! let config = DashConfig::load().expect("config");
//! if config.registry.allow_overwrite {
//!     println!("re-registering a schema id replaces it");
//! }
//! ```

mod builder;
mod error;
mod registry;

pub use builder::BuilderConfig;
pub use error::ConfigError;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
}

impl DashConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged builder section is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.builder.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".dash/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DASH_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dash").join("config.toml"))
    }
}
