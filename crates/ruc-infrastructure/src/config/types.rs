//! Configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USER_BATCH,
    IMAGE_CACHE_DEFAULT_CAPACITY,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Random-user API client configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Image loader configuration
    #[serde(default)]
    pub images: ImageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Random-user API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the API; validated at graph construction
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Number of users requested per fetch
    pub batch_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            batch_size: DEFAULT_USER_BATCH,
        }
    }
}

/// Image loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Maximum number of cached images
    pub cache_capacity: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            cache_capacity: IMAGE_CACHE_DEFAULT_CAPACITY,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
