//! Byte-oriented key/value storage backing the request cache.
//!
//! The [`ByteStore`] trait is the only persistence boundary the cache matcher
//! sees. Keys and values are opaque bytes; thread safety is the store's job.
//!
//! # Backends
//!
//! - [`InMemoryStore`]: process-local map, one per proxy instance or test.
//! - [`SqliteStore`]: single-table SQLite file that survives restarts.

pub mod entry;
pub mod error;
pub mod memory;
pub mod sqlite;

pub use entry::{CachedEntry, DecodeError, ENTRY_FORMAT_VERSION};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Key/value store holding encoded cache entries.
///
/// Implementations must tolerate concurrent calls from many request workers.
/// A `set` followed by a `get` of the same key on one thread observes the
/// write; concurrent writers to one key are last-write-wins.
pub trait ByteStore: Send + Sync {
    /// Insert or overwrite the value stored under `key`.
    fn set(&self, key: &[u8], value: &[u8]) -> StoreResult<()>;

    /// Fetch the value under `key`.
    ///
    /// Returns [`StoreError::NotFound`] when the key is absent.
    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>>;

    /// Every key currently stored, in no guaranteed order.
    fn get_all_keys(&self) -> StoreResult<Vec<Vec<u8>>>;

    /// Remove every entry.
    fn delete_all(&self) -> StoreResult<()>;

    fn len(&self) -> StoreResult<usize> {
        Ok(self.get_all_keys()?.len())
    }

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
