//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tufstore
///
/// "Not found" is deliberately absent from the load path: a missing role
/// is `Ok(None)`, never an error (see [`crate::ports::MetadataStore`]).
#[derive(Error, Debug)]
pub enum Error {
    /// Storage initialization error (base directory missing or not a directory)
    #[error("Initialization error: {message}")]
    Initialization {
        /// Description of what made the storage root unusable
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Attempt to persist metadata that has not been marked trusted
    #[error("Refusing to save untrusted metadata for role '{role}'")]
    UntrustedMetadata {
        /// Role of the rejected metadata
        role: String,
    },

    /// Role identifier failed validation
    #[error("Invalid role name '{name}': {message}")]
    InvalidRole {
        /// The rejected role name
        name: String,
        /// Why the name was rejected
        message: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Storage error creation methods
impl Error {
    /// Create an initialization error
    pub fn initialization<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    /// Create an untrusted metadata error
    pub fn untrusted_metadata<S: Into<String>>(role: S) -> Self {
        Self::UntrustedMetadata { role: role.into() }
    }

    /// Create an invalid role error
    pub fn invalid_role<S: Into<String>, M: Into<String>>(name: S, message: M) -> Self {
        Self::InvalidRole {
            name: name.into(),
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
