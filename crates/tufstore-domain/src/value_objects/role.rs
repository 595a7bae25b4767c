//! Role identifiers for trust-chain metadata
//!
//! A [`Role`] names one document of the TUF trust chain: `root`,
//! `snapshot`, `timestamp`, or a targets role (the top-level `targets`
//! document or any named delegate). Role names double as storage keys, so
//! parsing constrains them to a filesystem-safe character set before they
//! ever reach path construction.

use crate::constants::{
    METADATA_EXTENSION, ROLE_NAME_MAX_LENGTH, ROLE_ROOT, ROLE_SNAPSHOT, ROLE_TIMESTAMP,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed discriminator for the metadata type a role maps to
///
/// The dispatch table is fixed: `root`, `snapshot`, and `timestamp` map to
/// their own kinds, every other valid name is a targets role (top-level
/// `targets` or a named delegate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKind {
    /// Root metadata (trust anchor)
    Root,
    /// Snapshot metadata
    Snapshot,
    /// Timestamp metadata
    Timestamp,
    /// Targets metadata, including named delegates
    Targets,
}

impl MetadataKind {
    /// Human-readable name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Snapshot => "snapshot",
            Self::Timestamp => "timestamp",
            Self::Targets => "targets",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated identifier for one metadata document in the trust chain
///
/// Roles are both lookup keys and dispatch tags. [`Role::parse`] is the
/// only way to obtain one, so every `Role` in the system is guaranteed to
/// be safe for use in a storage key.
///
/// # Example
///
/// ```
/// use tufstore_domain::value_objects::{MetadataKind, Role};
///
/// let role = Role::parse("snapshot").unwrap();
/// assert_eq!(role.kind(), MetadataKind::Snapshot);
/// assert_eq!(role.filename(), "snapshot.json");
///
/// let delegate = Role::parse("django-packages").unwrap();
/// assert_eq!(delegate.kind(), MetadataKind::Targets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// The root role (trust anchor)
    Root,
    /// The snapshot role
    Snapshot,
    /// The timestamp role
    Timestamp,
    /// A targets role: the top-level `targets` document or a named delegate
    Targets(String),
}

impl Role {
    /// Parse and validate a role name
    ///
    /// Accepts names built from ASCII letters, digits, `.`, `_`, and `-`,
    /// up to [`ROLE_NAME_MAX_LENGTH`] bytes. Empty names, leading dots,
    /// and anything containing a path separator are rejected, so a role
    /// can never escape the storage base directory.
    pub fn parse<S: AsRef<str>>(name: S) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::invalid_role(name, "role name must not be empty"));
        }
        if name.len() > ROLE_NAME_MAX_LENGTH {
            return Err(Error::invalid_role(
                name,
                format!("role name exceeds {} bytes", ROLE_NAME_MAX_LENGTH),
            ));
        }
        if name.starts_with('.') {
            return Err(Error::invalid_role(
                name,
                "role name must not start with '.'",
            ));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(Error::invalid_role(
                name,
                format!("role name contains forbidden character '{}'", bad),
            ));
        }

        Ok(match name {
            ROLE_ROOT => Self::Root,
            ROLE_SNAPSHOT => Self::Snapshot,
            ROLE_TIMESTAMP => Self::Timestamp,
            _ => Self::Targets(name.to_string()),
        })
    }

    /// The role name as used in storage keys and metadata documents
    pub fn name(&self) -> &str {
        match self {
            Self::Root => ROLE_ROOT,
            Self::Snapshot => ROLE_SNAPSHOT,
            Self::Timestamp => ROLE_TIMESTAMP,
            Self::Targets(name) => name,
        }
    }

    /// The metadata kind this role dispatches to
    pub fn kind(&self) -> MetadataKind {
        match self {
            Self::Root => MetadataKind::Root,
            Self::Snapshot => MetadataKind::Snapshot,
            Self::Timestamp => MetadataKind::Timestamp,
            Self::Targets(_) => MetadataKind::Targets,
        }
    }

    /// Storage key for this role: `<name>.json`
    pub fn filename(&self) -> String {
        format!("{}.{}", self.name(), METADATA_EXTENSION)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}
