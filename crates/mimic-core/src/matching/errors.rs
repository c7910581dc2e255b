use thiserror::Error;

use crate::cache::{DecodeError, StoreError};

/// Errors returned by [`CacheMatcher`](super::CacheMatcher) operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The matcher was built without a store. Callers match on this message.
    #[error("No cache set")]
    NoCacheConfigured,

    #[error("no cached response for fingerprint {fingerprint}")]
    NotFound { fingerprint: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Store(StoreError),
}

impl CacheError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for CacheError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key } => CacheError::NotFound { fingerprint: key },
            other => CacheError::Store(other),
        }
    }
}
