//! Cached entry and its byte encoding.
//!
//! Entries are stored as a JSON object carrying an explicit format version:
//!
//! ```text
//! {"version": 1, "request": {...}, "pair": {...}, "headerMatch": false}
//! ```
//!
//! Only the current version decodes. Anything written by a different codec is
//! reported as a [`DecodeError`] instead of being misread.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Headers, RequestDetails, RequestTemplateResponsePair};

pub const ENTRY_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed cache entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported cache entry version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// A match result stored under a request fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedEntry {
    /// Request the entry was saved for (synthetic for preloaded entries).
    pub request: RequestDetails,
    pub pair: RequestTemplateResponsePair,
    /// The template declared headers; a hit must be checked against them
    /// before it is trusted, since headers are not part of the fingerprint.
    pub header_match: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    version: u32,
    request: RequestDetails,
    pair: RequestTemplateResponsePair,
    header_match: bool,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl CachedEntry {
    /// Builds an entry for `pair`, deriving the header flag from its template.
    pub fn new(request: RequestDetails, pair: RequestTemplateResponsePair) -> Self {
        let header_match = pair.request_template.has_headers();
        Self {
            request,
            pair,
            header_match,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, DecodeError> {
        let record = EntryRecord {
            version: ENTRY_FORMAT_VERSION,
            request: self.request.clone(),
            pair: self.pair.clone(),
            header_match: self.header_match,
        };
        Ok(serde_json::to_vec(&record)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let probe: VersionProbe = serde_json::from_slice(bytes)?;
        if probe.version != ENTRY_FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion {
                found: probe.version,
                expected: ENTRY_FORMAT_VERSION,
            });
        }
        let record: EntryRecord = serde_json::from_slice(bytes)?;
        Ok(Self {
            request: record.request,
            pair: record.pair,
            header_match: record.header_match,
        })
    }

    /// Whether a live request carrying `headers` may be served from this entry.
    ///
    /// Without a header obligation the fingerprint match is enough. Otherwise
    /// each header named by the template must be present (name compared
    /// case-insensitively) and carry every expected value.
    pub fn accepts_headers(&self, headers: &Headers) -> bool {
        if !self.header_match {
            return true;
        }
        self.pair
            .request_template
            .headers
            .iter()
            .all(|(name, expected)| {
                let actual: Vec<&String> = headers
                    .iter()
                    .filter(|(live, _)| live.eq_ignore_ascii_case(name))
                    .flat_map(|(_, values)| values)
                    .collect();
                !actual.is_empty() && expected.iter().all(|value| actual.contains(&value))
            })
    }
}
