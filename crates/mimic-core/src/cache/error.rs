//! Error types for byte store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a [`ByteStore`](super::ByteStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No value under the requested key.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl StoreError {
    pub fn not_found(key: &[u8]) -> Self {
        StoreError::NotFound {
            key: String::from_utf8_lossy(key).into_owned(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}
