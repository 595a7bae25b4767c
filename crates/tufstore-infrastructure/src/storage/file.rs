//! Filesystem-backed metadata storage
//!
//! [`FileStorage`] persists one file per role inside a single base
//! directory: `root.json`, `snapshot.json`, `timestamp.json`, and one
//! `<name>.json` per targets role. There is no manifest, index, or lock
//! file; the key space is simply the files present in the directory.
//!
//! Writes are single blocking `fs::write` calls and are not atomic. An
//! interrupted write can leave a truncated file behind, which surfaces as
//! an error on the next read rather than being silently accepted.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use tufstore_domain::error::{Error, Result};
use tufstore_domain::ports::{ItemStore, MetadataStore};
use tufstore_domain::value_objects::{Metadata, Role, TrustedMetadata};

/// Durable metadata storage over a directory of role-named files
///
/// The base directory is validated once at construction and never changes;
/// every later operation assumes the root is a usable directory. One
/// instance per base directory per process is assumed by convention, not
/// enforced: concurrent writers race at the filesystem level with
/// last-write-wins semantics.
///
/// # Example
///
/// ```no_run
/// use tufstore_infrastructure::storage::FileStorage;
/// use tufstore_domain::ports::MetadataStore;
/// use tufstore_domain::value_objects::Role;
///
/// # fn main() -> tufstore_domain::Result<()> {
/// let storage = FileStorage::new("/var/lib/tufstore")?;
/// let root = storage.load(&Role::parse("root")?)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base directory holding one file per role
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a storage instance over an existing directory
    ///
    /// Fails with [`Error::Initialization`] if the path does not exist or
    /// is not a directory. The check is eager so that later operations can
    /// treat the root as valid.
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_dir() {
            return Err(Error::initialization(format!(
                "Cannot initialize local metadata state: '{}' is not a directory",
                base_dir.display()
            )));
        }
        Ok(Self { base_dir })
    }

    /// The directory all items are stored under
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path for an item key inside the base directory
    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl ItemStore for FileStorage {
    fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(key);
        fs::read(&path).map_err(|err| {
            Error::io_with_source(format!("Failed to read '{}'", path.display()), err)
        })
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, bytes).map_err(|err| {
            Error::io_with_source(format!("Failed to write '{}'", path.display()), err)
        })
    }

    fn delete(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(err) = fs::remove_file(&path) {
            debug!(path = %path.display(), error = %err, "Ignoring failed item delete");
        }
    }
}

impl MetadataStore for FileStorage {
    fn load(&self, role: &Role) -> Result<Option<TrustedMetadata>> {
        let key = role.filename();
        if !self.exists(&key) {
            debug!(role = %role, "No stored metadata for role");
            return Ok(None);
        }

        let bytes = self.read(&key)?;
        debug!(role = %role, bytes = bytes.len(), "Loaded metadata from storage");
        Ok(Some(Metadata::untrusted(role.clone(), bytes).mark_trusted()))
    }

    fn save(&self, metadata: &Metadata) -> Result<()> {
        if !metadata.is_trusted() {
            return Err(Error::untrusted_metadata(metadata.role().name()));
        }

        let key = metadata.role().filename();
        self.write(&key, metadata.source())?;
        debug!(
            role = %metadata.role(),
            bytes = metadata.source().len(),
            "Saved metadata to storage"
        );
        Ok(())
    }
}
