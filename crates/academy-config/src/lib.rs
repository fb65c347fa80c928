//! # academy-config
//!
//! Layered configuration loading for the academy record store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ACADEMY_*` prefix, `__` as separator)
//! 2. Project-level `.academy/config.toml`
//! 3. User-level `~/.config/academy/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ACADEMY_STORE__LATENCY_MS` -> `store.latency_ms`,
//! `ACADEMY_TENANT__CLUB_ID` -> `tenant.club_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use academy_config::AcademyConfig;
//!
//! let config = AcademyConfig::load_with_dotenv().expect("config");
//! println!("latency: {:?}", config.store.latency());
//! ```

mod error;
mod store;
mod tenant;

pub use error::ConfigError;
pub use store::{Backend, IdStrategy, StoreConfig};
pub use tenant::TenantConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AcademyConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub tenant: TenantConfig,
}

impl AcademyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI overrides) on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".academy/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ACADEMY_").split("__"))
    }

    /// Reject values that would make the store unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tenant.club_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tenant.club_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.store.backend == Backend::Jsonl && self.store.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.data_dir".into(),
                reason: "required for the jsonl backend".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("academy").join("config.toml"))
    }
}
