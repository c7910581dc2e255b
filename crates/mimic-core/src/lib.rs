//! Exact-match request cache for the mimic service-virtualization proxy.
//!
//! Requests are reduced to a [`fingerprint::Fingerprint`] over their identity
//! fields and looked up in a pluggable [`cache::ByteStore`]. The
//! [`matching::CacheMatcher`] is the entry point used by the proxy's matching
//! pipeline.

pub mod cache;
pub mod config;
pub mod fingerprint;
pub mod matching;
pub mod model;

pub use cache::{ByteStore, InMemoryStore, SqliteStore, StoreError, StoreResult};
pub use config::{CacheBackend, CacheConfig};
pub use fingerprint::{fingerprint, Fingerprint};
pub use matching::{CacheError, CacheMatcher, PreloadSummary};
