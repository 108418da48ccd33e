//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the injector
///
/// Absent keys, non-record inputs and unbindable fields are not errors;
/// they show up in [`BindReport`](crate::binder::BindReport) instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A stored value could not be extracted as the requested type
    #[error("Downcast error: expected {expected}, found {found}")]
    Downcast {
        /// Type the caller asked for
        expected: &'static str,
        /// Type actually stored
        found: &'static str,
    },

    /// A registered value does not fit the field it was injected into
    #[error(
        "Field type mismatch: field `{field}` ({expected}) cannot hold value of key `{key}` ({found})"
    )]
    FieldTypeMismatch {
        /// Field being injected
        field: String,
        /// Registry key the value came from
        key: String,
        /// Field type
        expected: &'static str,
        /// Type of the registered value
        found: &'static str,
    },

    /// A field declares both an injection and an infection key
    #[error(
        "Conflicting tags on field `{field}`: injection `{injection}` and infection `{infection}`"
    )]
    ConflictingTags {
        /// Offending field
        field: String,
        /// Injection key declared on the field
        injection: String,
        /// Infection key declared on the field
        infection: String,
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

// Binding error creation methods
impl Error {
    /// Create a downcast error
    pub fn downcast(expected: &'static str, found: &'static str) -> Self {
        Self::Downcast { expected, found }
    }

    /// Create a field type mismatch error
    pub fn field_type_mismatch<F: Into<String>, K: Into<String>>(
        field: F,
        key: K,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create a conflicting tags error
    pub fn conflicting_tags<F, I, N>(field: F, injection: I, infection: N) -> Self
    where
        F: Into<String>,
        I: Into<String>,
        N: Into<String>,
    {
        Self::ConflictingTags {
            field: field.into(),
            injection: injection.into(),
            infection: infection.into(),
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
