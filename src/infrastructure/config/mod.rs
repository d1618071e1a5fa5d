//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (`config.yml`)
//! - Environment variable overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, CONFIG_FILE_NAME};
