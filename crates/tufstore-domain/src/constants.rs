//! Domain layer constants
//!
//! Canonical role names from the TUF trust chain plus the limits applied
//! when validating role identifiers.

// ============================================================================
// ROLE CONSTANTS
// ============================================================================

/// Name of the root role (trust anchor)
pub const ROLE_ROOT: &str = "root";

/// Name of the snapshot role
pub const ROLE_SNAPSHOT: &str = "snapshot";

/// Name of the timestamp role
pub const ROLE_TIMESTAMP: &str = "timestamp";

/// Name of the top-level targets role
pub const ROLE_TARGETS: &str = "targets";

// ============================================================================
// STORAGE KEY CONSTANTS
// ============================================================================

/// File extension used for persisted metadata items
pub const METADATA_EXTENSION: &str = "json";

/// Maximum accepted length of a role identifier
pub const ROLE_NAME_MAX_LENGTH: usize = 255;
