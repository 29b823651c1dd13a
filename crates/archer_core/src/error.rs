//! Error types

use thiserror::Error;

/// Durable storage failures
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("storage I/O failed for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend could not serve the request for a non-I/O reason
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The persistence worker has shut down (runtime dropped)
    #[error("persistence worker is gone")]
    WorkerGone,
}

/// Errors surfaced by the preference stores
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// A setter received a value outside its closed set
    #[error("invalid {kind}: `{value}`")]
    InvalidArgument { kind: &'static str, value: String },

    /// Durable storage could not be read or written.
    ///
    /// Stores log and swallow this; it only escapes from the low-level
    /// [`Persister`](crate::Persister) API.
    #[error(transparent)]
    PersistenceUnavailable(#[from] StorageError),
}

impl PreferenceError {
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PreferenceError>;
