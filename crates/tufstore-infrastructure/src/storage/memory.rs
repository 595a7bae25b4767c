//! In-memory metadata storage
//!
//! HashMap-backed implementation of the storage ports, used by tests and
//! as a default when no durable state is wanted. Contents are lost when
//! the instance is dropped.

use std::collections::HashMap;
use std::sync::Mutex;

use tufstore_domain::error::{Error, Result};
use tufstore_domain::ports::{ItemStore, MetadataStore};
use tufstore_domain::value_objects::{Metadata, Role, TrustedMetadata};

/// Ephemeral metadata storage backed by a `HashMap`
///
/// Behaves like [`crate::storage::FileStorage`] for every contract
/// property except durability: last write wins, absence is `Ok(None)`,
/// untrusted saves are rejected, deletes never fail.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.lock().expect("item map lock poisoned").len()
    }

    /// Whether the storage holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemStore for MemoryStorage {
    fn exists(&self, key: &str) -> bool {
        self.items
            .lock()
            .expect("item map lock poisoned")
            .contains_key(key)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        self.items
            .lock()
            .expect("item map lock poisoned")
            .get(key)
            .cloned()
            .ok_or_else(|| Error::io(format!("No item stored for key '{}'", key)))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.items
            .lock()
            .expect("item map lock poisoned")
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.items.lock().expect("item map lock poisoned").remove(key);
    }
}

impl MetadataStore for MemoryStorage {
    fn load(&self, role: &Role) -> Result<Option<TrustedMetadata>> {
        let key = role.filename();
        if !self.exists(&key) {
            return Ok(None);
        }
        let bytes = self.read(&key)?;
        Ok(Some(Metadata::untrusted(role.clone(), bytes).mark_trusted()))
    }

    fn save(&self, metadata: &Metadata) -> Result<()> {
        if !metadata.is_trusted() {
            return Err(Error::untrusted_metadata(metadata.role().name()));
        }
        self.write(&metadata.role().filename(), metadata.source())
    }
}
