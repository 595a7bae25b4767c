//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the trust chain
//! without identity. Value objects are defined by their attributes and can
//! be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Role`] | Validated identifier for a metadata kind in the trust chain |
//! | [`MetadataKind`] | Closed discriminator used for role dispatch |
//! | [`Metadata`] | Opaque metadata payload tagged with its role and trust flag |
//! | [`TrustedMetadata`] | Wrapper guaranteeing the trust flag is set |

/// Metadata payload and trust wrapper value objects
pub mod metadata;
/// Role identifiers and kind dispatch
pub mod role;

// Re-export commonly used value objects
pub use metadata::{Metadata, TrustedMetadata};
pub use role::{MetadataKind, Role};
