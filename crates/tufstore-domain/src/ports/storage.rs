//! Storage Ports
//!
//! Defines the contracts for durable persistence of trust-chain metadata.
//!
//! All methods are synchronous, blocking calls: persistence here is a
//! local, single-client concern and every operation completes or fails
//! before returning. There is no retry and no cross-process coordination;
//! concurrent writers to the same backing store race with last-write-wins
//! semantics.

use crate::error::Result;
use crate::value_objects::{Metadata, Role, TrustedMetadata};

/// Raw keyed-item access underlying metadata persistence
///
/// A minimal key-value protocol over whatever the adapter uses as backing
/// store. Keys are flat, filesystem-safe strings; values are raw bytes
/// that pass through unmodified. Callers normally go through
/// [`MetadataStore`], but the primitives are usable directly.
pub trait ItemStore: Send + Sync {
    /// Check whether an item exists for a key, without side effects
    fn exists(&self, key: &str) -> bool;

    /// Read the full byte contents of an item
    ///
    /// Fails with an I/O error if the item is unreadable. Callers are
    /// expected to have checked [`ItemStore::exists`] first; a missing
    /// item is also an I/O error here.
    fn read(&self, key: &str) -> Result<Vec<u8>>;

    /// Write bytes to a key, creating or fully overwriting the item
    ///
    /// Not guaranteed atomic: an interrupted write may leave a partial
    /// item behind, surfacing as an error on the next read.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Best-effort delete of an item
    ///
    /// Never fails: deleting a missing item or hitting an I/O error on
    /// removal is silently ignored.
    fn delete(&self, key: &str);
}

/// Durable storage contract for trust-chain metadata
///
/// The seam all trust-verification logic programs against. A store maps
/// each role to at most one current item; saving a role replaces whatever
/// was there before.
///
/// # Example
///
/// ```ignore
/// use tufstore_domain::ports::MetadataStore;
/// use tufstore_domain::value_objects::Role;
///
/// fn refresh_root(store: &dyn MetadataStore) -> tufstore_domain::Result<()> {
///     let role = Role::parse("root")?;
///     if let Some(trusted) = store.load(&role)? {
///         println!("have {} bytes of root metadata", trusted.source().len());
///     }
///     Ok(())
/// }
/// ```
pub trait MetadataStore: Send + Sync {
    /// Load the current metadata for a role
    ///
    /// Returns `Ok(None)` if nothing is stored for the role; absence is a
    /// normal outcome, never an error. On a hit, the stored bytes are
    /// handed unmodified to the metadata constructor for the role's kind
    /// and returned already wrapped as [`TrustedMetadata`]: anything in
    /// the store was persisted post-verification.
    fn load(&self, role: &Role) -> Result<Option<TrustedMetadata>>;

    /// Persist metadata under its role
    ///
    /// Precondition: the metadata must be marked trusted, otherwise
    /// [`crate::error::Error::UntrustedMetadata`] is returned and nothing
    /// is written. On success a subsequent [`MetadataStore::load`] for the
    /// same role returns equivalent content, durably across restarts.
    fn save(&self, metadata: &Metadata) -> Result<()>;
}
