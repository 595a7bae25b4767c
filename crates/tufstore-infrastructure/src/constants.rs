//! Infrastructure layer constants
//!
//! Configuration and logging defaults. Domain constants (role names, key
//! derivation) live in `tufstore-domain`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TUFSTORE";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tufstore.toml";

/// Default base directory for persisted metadata
pub const DEFAULT_METADATA_DIR: &str = "metadata";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filter directives
pub const LOG_FILTER_ENV: &str = "TUFSTORE_LOG";
