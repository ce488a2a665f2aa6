//! Configuration management
//!
//! Typed configuration with layered loading: compiled defaults, then an
//! optional TOML file, then `RUC_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ApiConfig, AppConfig, ImageConfig, LoggingConfig};
