//! # felis-config
//!
//! Layered configuration loading for Felis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FELIS_*` prefix, `__` as separator)
//! 2. Project-level `.felis/config.toml`
//! 3. User-level `~/.config/felis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FELIS_CATAPI__API_KEY` -> `catapi.api_key`,
//! `FELIS_CACHE__TTL_HOURS` -> `cache.ttl_hours`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use felis_config::FelisConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = FelisConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = FelisConfig::load().expect("config");
//!
//! if config.catapi.has_api_key() {
//!     println!("authenticated requests enabled");
//! }
//! ```

mod cache;
mod catapi;
mod error;
mod images;

pub use cache::CacheConfig;
pub use catapi::CatApiConfig;
pub use error::ConfigError;
pub use images::ImagesConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FelisConfig {
    #[serde(default)]
    pub catapi: CatApiConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl FelisConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`FELIS_*` prefix)
    /// 2. `.felis/config.toml` (project-local)
    /// 3. `~/.config/felis/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a config file is malformed or a
    /// value cannot be deserialized into the expected type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a config file is malformed or a
    /// value cannot be deserialized into the expected type.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".felis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("FELIS_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("felis").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` exists.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = FelisConfig::default();
        assert!(!config.catapi.has_api_key());
        assert_eq!(config.catapi.base_url, "https://api.thecatapi.com/v1");
        assert_eq!(config.images.random_base_url, "https://cataas.com");
        assert_eq!(config.cache.ttl_hours, 24);
    }

    #[test]
    fn serde_defaults_fill_missing_sections() {
        let config: FelisConfig = serde_json::from_str("{}").expect("empty object deserializes");
        assert_eq!(config.catapi.request_timeout_secs, 10);
        assert_eq!(config.cache.ttl_hours, 24);
    }
}
