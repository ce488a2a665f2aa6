//! Infrastructure layer for the Random User Client
//!
//! Cross-cutting technical concerns: configuration loading, structured
//! logging, the dependency-injection engine, the concrete wiring built on
//! top of it, and the shared clients that wiring constructs.
//!
//! ## Architecture
//!
//! - `config`: layered configuration (defaults, TOML file, environment)
//! - `logging`: tracing subscriber setup
//! - `di`: typed-key binding registry, scoped components, injection
//! - `clients`: the HTTP API client and the image loader
//! - `adapters`: activity-scoped presentation helpers

pub mod adapters;
pub mod clients;
pub mod config;
pub mod constants;
pub mod di;
pub mod logging;
