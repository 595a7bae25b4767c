//! Configuration
//!
//! TOML + environment configuration for storage and logging, merged with
//! figment. See [`ConfigLoader`] for source precedence.

/// Configuration loading and validation
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, StorageConfig};
