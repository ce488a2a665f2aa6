//! Configuration loader
//!
//! Handles loading configuration from defaults, an optional TOML file
//! and environment variables, merged in that order with Figment.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ruc_domain::error::{Error, Result};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
use crate::logging::log_config_loaded;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix, `__` separating the section
    ///    from the field (e.g. `RUC_API__BASE_URL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        // Double underscore separates nested keys so single underscores
        // survive inside field names, e.g. RUC_API__TIMEOUT_SECS
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        figment
            .extract()
            .map_err(|e| Error::configuration_with_source("failed to load configuration", e))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
