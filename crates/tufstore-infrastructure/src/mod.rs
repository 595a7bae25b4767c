//! # Infrastructure Layer
//!
//! Concrete adapters and cross-cutting technical concerns behind the
//! domain ports.
//!
//! ## Module Categories
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`storage`] | Filesystem and in-memory metadata storage adapters |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Core infrastructure modules
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, StorageConfig};
pub use error_ext::ErrorContext;
pub use storage::{FileStorage, MemoryStorage};
