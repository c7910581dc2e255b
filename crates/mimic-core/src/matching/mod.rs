//! Request matching entry points for the proxy pipeline.
//!
//! Only the exact-match cache lives here; the multi-comparator template
//! matcher that runs on a miss is provided by the proxy.

pub mod cache_matcher;
pub mod errors;

pub use cache_matcher::{CacheMatcher, PreloadSummary};
pub use errors::CacheError;
