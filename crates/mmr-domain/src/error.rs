//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the metadata model registry
#[derive(Error, Debug)]
pub enum Error {
    /// A plugin is already registered at the same `(vo, name)` key
    #[error(
        "Plugin '{name}'{} already registered by {existing}. Use override to replace.",
        scope_suffix(.vo)
    )]
    DuplicateRegistration {
        /// Plugin name of the conflicting key
        name: String,
        /// Organization scope of the conflicting key
        vo: Option<String>,
        /// Type name of the class currently holding the key
        existing: String,
    },

    /// No plugin is registered under the requested name and scope
    #[error(
        "Unknown metadata plugin: '{name}'{}. Available: {available:?}",
        scope_suffix(.vo)
    )]
    UnknownPlugin {
        /// Requested plugin name
        name: String,
        /// Requested organization scope
        vo: Option<String>,
        /// Plugin names visible in the requested scope
        available: Vec<String>,
    },

    /// Parameters do not satisfy the plugin's declared fields
    #[error("Validation failed for plugin '{plugin}': {message}")]
    Validation {
        /// Plugin being constructed
        plugin: String,
        /// Description of the offending fields
        message: String,
    },

    /// A type offered for registration does not satisfy the base model contract
    #[error("Invalid metadata plugin '{plugin}': {message}")]
    InvalidPlugin {
        /// Type name or derived plugin name
        plugin: String,
        /// What is wrong with it
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
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

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn scope_suffix(vo: &Option<String>) -> String {
    vo.as_deref()
        .map(|vo| format!(" for VO {vo}"))
        .unwrap_or_default()
}

// Registry error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate_registration<N, E>(name: N, vo: Option<&str>, existing: E) -> Self
    where
        N: Into<String>,
        E: Into<String>,
    {
        Self::DuplicateRegistration {
            name: name.into(),
            vo: vo.map(str::to_string),
            existing: existing.into(),
        }
    }

    /// Create an unknown plugin error
    pub fn unknown_plugin<N: Into<String>>(name: N, vo: Option<&str>, available: Vec<String>) -> Self {
        Self::UnknownPlugin {
            name: name.into(),
            vo: vo.map(str::to_string),
            available,
        }
    }

    /// Create a field validation error
    pub fn validation<P: Into<String>, S: Into<String>>(plugin: P, message: S) -> Self {
        Self::Validation {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// Create an invalid plugin error
    pub fn invalid_plugin<P: Into<String>, S: Into<String>>(plugin: P, message: S) -> Self {
        Self::InvalidPlugin {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
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
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
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
}
