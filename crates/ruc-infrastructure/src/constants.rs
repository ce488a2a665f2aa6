//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ruc.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RUC";

// ============================================================================
// API CLIENT CONSTANTS
// ============================================================================

/// Default base address of the random-user API
pub const DEFAULT_API_BASE_URL: &str = "https://randomuser.me/api/";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of users requested per fetch
pub const DEFAULT_USER_BATCH: u32 = 10;

// ============================================================================
// IMAGE LOADER CONSTANTS
// ============================================================================

/// Default capacity of the in-process image cache (entries)
pub const IMAGE_CACHE_DEFAULT_CAPACITY: u64 = 256;
