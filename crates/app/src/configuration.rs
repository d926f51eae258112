//! Application configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. An optional `planets.toml` (or `.json`, `.yaml`) in the working directory
//! 3. `PLANETS_*` environment variables, e.g. `PLANETS_API_BASE_URL`

use std::collections::BTreeMap;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

use crate::error::AppError;

/// Where successful responses are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process cache, empty on every start
    #[default]
    Memory,
    /// JSON files under `cache_dir`
    File,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfiguration {
    /// Base URL every endpoint path is resolved against
    pub api_base_url: Url,
    /// Response cache backend
    pub cache: CacheBackend,
    /// Directory for the file cache; the platform cache directory when unset
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl AppConfiguration {
    /// Default API base URL.
    pub const DEFAULT_API_BASE_URL: &'static str = "https://swapi.dev/api";

    /// Loads configuration from defaults, `planets.*` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::with_name("planets").required(false))
            .add_source(Environment::with_prefix("PLANETS"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Loads configuration from defaults overridden by a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a value has the wrong type.
    pub fn from_toml(toml: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api_base_url", Self::DEFAULT_API_BASE_URL)?
            .set_default("cache", "memory")?
            .set_default("log_filter", "info")
    }
}
