//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and the storage
//! infrastructure. Ports follow the Dependency Inversion Principle:
//! the domain defines the interfaces here and infrastructure adapters
//! implement them.
//!
//! ## Organization
//!
//! - **storage** - Durable persistence ports for trust-chain metadata

/// Durable persistence ports
pub mod storage;

// Re-export commonly used port traits for convenience
pub use storage::{ItemStore, MetadataStore};
