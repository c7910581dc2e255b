//! Exact-match response cache in front of the template matcher.
//!
//! # Flow
//!
//! 1. The proxy asks [`CacheMatcher::get_cached_response`] first.
//! 2. On a miss it runs the full template matcher and, on success, promotes
//!    the result with [`CacheMatcher::save_request_template_response_pair`].
//! 3. At simulation load, [`CacheMatcher::preload_cache`] inserts every
//!    template whose request is fully determined by exact matchers.
//!
//! Every operation fails with [`CacheError::NoCacheConfigured`] before doing
//! anything else when no store is attached.

use std::fmt;
use std::sync::Arc;

use crate::cache::{ByteStore, CachedEntry, StoreError};
use crate::fingerprint::fingerprint;
use crate::model::{RequestDetails, RequestTemplateResponsePair, Simulation};

use super::CacheError;

/// Outcome of a preload pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadSummary {
    /// Templates written to the store.
    pub cached: usize,
    /// Templates left to the full matcher (not fully exact).
    pub skipped: usize,
}

#[derive(Clone, Default)]
pub struct CacheMatcher {
    request_cache: Option<Arc<dyn ByteStore>>,
}

impl fmt::Debug for CacheMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheMatcher")
            .field("configured", &self.request_cache.is_some())
            .finish()
    }
}

impl CacheMatcher {
    pub fn new(store: Arc<dyn ByteStore>) -> Self {
        Self {
            request_cache: Some(store),
        }
    }

    /// A matcher with no store; every operation returns `NoCacheConfigured`.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.request_cache.is_some()
    }

    fn store(&self) -> Result<&dyn ByteStore, CacheError> {
        self.request_cache
            .as_deref()
            .ok_or(CacheError::NoCacheConfigured)
    }

    /// Cached entry for `request`, keyed by its fingerprint.
    pub fn get_cached_response(&self, request: &RequestDetails) -> Result<CachedEntry, CacheError> {
        let store = self.store()?;
        let key = fingerprint(request);
        let bytes = store.get(key.as_key())?;
        Ok(CachedEntry::decode(&bytes)?)
    }

    /// Lookup that also settles the header obligation of the hit.
    ///
    /// `Ok(None)` means the proxy must fall through to the full matcher: either
    /// nothing is cached or the cached template's headers are not satisfied.
    pub fn get_matching_response(
        &self,
        request: &RequestDetails,
    ) -> Result<Option<CachedEntry>, CacheError> {
        match self.get_cached_response(request) {
            Ok(entry) if entry.accepts_headers(&request.headers) => Ok(Some(entry)),
            Ok(_) => Ok(None),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Every stored entry, in store enumeration order.
    pub fn get_all_responses(&self) -> Result<Vec<CachedEntry>, CacheError> {
        let store = self.store()?;
        let mut entries = Vec::new();
        for key in store.get_all_keys()? {
            let bytes = match store.get(&key) {
                Ok(bytes) => bytes,
                // Flushed between enumeration and fetch.
                Err(StoreError::NotFound { .. }) => continue,
                Err(err) => return Err(err.into()),
            };
            entries.push(CachedEntry::decode(&bytes)?);
        }
        Ok(entries)
    }

    /// Stores `pair` as the answer for `request`, replacing any previous entry.
    pub fn save_request_template_response_pair(
        &self,
        request: &RequestDetails,
        pair: &RequestTemplateResponsePair,
    ) -> Result<(), CacheError> {
        let store = self.store()?;
        write_entry(store, request.clone(), pair.clone())
    }

    pub fn flush_cache(&self) -> Result<(), CacheError> {
        let store = self.store()?;
        store.delete_all()?;
        Ok(())
    }

    /// Caches every fully exact template of `simulation` ahead of traffic.
    ///
    /// Templates that are not fully exact are skipped, which is not an error.
    /// When two templates resolve to the same request the later one wins.
    pub fn preload_cache(&self, simulation: &Simulation) -> Result<PreloadSummary, CacheError> {
        let store = self.store()?;
        let mut summary = PreloadSummary::default();

        for (idx, pair) in simulation.templates.iter().enumerate() {
            let Some(request) = pair.request_template.exact_request() else {
                tracing::debug!(template = idx, "skipping template without full exact match");
                summary.skipped += 1;
                continue;
            };
            tracing::debug!(
                template = idx,
                method = %request.method,
                destination = %request.destination,
                path = %request.path,
                "preloading exact template"
            );
            write_entry(store, request, pair.clone())?;
            summary.cached += 1;
        }

        tracing::info!(
            cached = summary.cached,
            skipped = summary.skipped,
            "cache preload complete"
        );
        Ok(summary)
    }
}

fn write_entry(
    store: &dyn ByteStore,
    request: RequestDetails,
    pair: RequestTemplateResponsePair,
) -> Result<(), CacheError> {
    let key = fingerprint(&request);
    let entry = CachedEntry::new(request, pair);
    store.set(key.as_key(), &entry.encode()?)?;
    Ok(())
}
