//! # Domain Layer
//!
//! Core types and boundary contracts for TUF metadata persistence.
//!
//! This crate defines what the rest of the system programs against: the
//! metadata roles of the trust chain, the trusted-metadata value objects,
//! and the storage ports that infrastructure adapters implement. It holds
//! no I/O of its own.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Unified error type and `Result` alias |
//! | [`value_objects`] | `Role`, `Metadata`, `TrustedMetadata` |
//! | [`ports`] | `ItemStore` and `MetadataStore` boundary traits |
//! | [`constants`] | Canonical role names and limits |

/// Canonical role names and domain limits
pub mod constants;
/// Unified error type and result alias
pub mod error;
/// Storage boundary traits implemented by infrastructure adapters
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::{ItemStore, MetadataStore};
pub use value_objects::{Metadata, MetadataKind, Role, TrustedMetadata};
