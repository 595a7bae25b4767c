//! Metadata payload and trust wrapper
//!
//! Storage treats metadata documents as opaque byte blobs: parsing,
//! signature checks, and trust-chain validation all live in the metadata
//! collaborator. What the domain tracks here is the pairing of a payload
//! with its [`Role`] and whether the caller has vouched for it.
//!
//! The trusted flag moves in one direction only. A freshly ingested
//! document starts untrusted ([`Metadata::untrusted`]); once verified, the
//! caller consumes it with [`Metadata::mark_trusted`] and gets back a
//! [`TrustedMetadata`] wrapper. There is no way to flip a shared object in
//! place.

use crate::value_objects::{MetadataKind, Role};
use serde::{Deserialize, Serialize};

/// Opaque metadata payload tagged with its role and trust flag
///
/// # Example
///
/// ```
/// use tufstore_domain::value_objects::{Metadata, Role};
///
/// let role = Role::parse("timestamp").unwrap();
/// let metadata = Metadata::untrusted(role, b"{\"signed\": {}}".to_vec());
/// assert!(!metadata.is_trusted());
///
/// let trusted = metadata.mark_trusted();
/// assert!(trusted.metadata().is_trusted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Role this document belongs to
    role: Role,

    /// Raw serialized document bytes, never interpreted by storage
    source: Vec<u8>,

    /// Whether the caller has vouched for this document
    trusted: bool,
}

impl Metadata {
    /// Create metadata from raw bytes, not yet trusted
    pub fn untrusted(role: Role, source: Vec<u8>) -> Self {
        Self {
            role,
            source,
            trusted: false,
        }
    }

    /// Role this document belongs to
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Metadata kind derived from the role dispatch table
    pub fn kind(&self) -> MetadataKind {
        self.role.kind()
    }

    /// Raw serialized document bytes
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Whether this document has been vouched for
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Mark this document trusted, consuming it
    ///
    /// This is the caller's assertion that the document has passed
    /// verification. The returned wrapper is the only source of metadata
    /// with the flag set.
    pub fn mark_trusted(mut self) -> TrustedMetadata {
        self.trusted = true;
        TrustedMetadata { metadata: self }
    }
}

/// Metadata whose trust flag is guaranteed set
///
/// Returned by [`crate::ports::MetadataStore::load`]: anything read back
/// from storage was persisted post-verification, so it comes out already
/// wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedMetadata {
    metadata: Metadata,
}

impl TrustedMetadata {
    /// Role this document belongs to
    pub fn role(&self) -> &Role {
        self.metadata.role()
    }

    /// Metadata kind derived from the role dispatch table
    pub fn kind(&self) -> MetadataKind {
        self.metadata.kind()
    }

    /// Raw serialized document bytes
    pub fn source(&self) -> &[u8] {
        self.metadata.source()
    }

    /// Borrow the wrapped metadata (trust flag set)
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Unwrap into the underlying metadata (trust flag stays set)
    pub fn into_metadata(self) -> Metadata {
        self.metadata
    }
}
