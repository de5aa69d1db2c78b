//! # pcl-config
//!
//! Layered configuration loading for the `pcl` admin client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PCL_*` prefix, `__` as separator)
//! 2. Project-level `.pcl/config.toml`
//! 3. User-level `~/.config/pcl/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `PCL_API__BASE_URL` -> `api.base_url`,
//! `PCL_GENERAL__ASSUME_YES` -> `general.assume_yes`, etc.
//!
//! ```no_run
//! use pcl_config::PclConfig;
//!
//! let config = PclConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod offer;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use offer::OfferConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PCL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PclConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub offer: OfferConfig,
}

impl PclConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        config.offer.deadline()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the provider chain. Public so tests can layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".pcl/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `~/.config/pcl/config.toml` (platform config dir).
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pcl").join("config.toml"))
    }
}
