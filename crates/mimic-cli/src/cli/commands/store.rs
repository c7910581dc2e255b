use anyhow::Context;
use mimic_core::config::{CacheBackend, CacheConfig};
use mimic_core::matching::CacheMatcher;

use super::super::args::StoreArgs;

/// Resolves config file, environment and `--db` (in that order) into a matcher.
pub(crate) fn open_matcher(args: &StoreArgs) -> anyhow::Result<CacheMatcher> {
    let mut config = match &args.config {
        Some(path) => CacheConfig::load(path)?,
        None => CacheConfig::default(),
    }
    .apply_env()?;

    if let Some(db) = &args.db {
        config = CacheConfig::sqlite(db);
    }
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid cache config")?;

    if config.backend == CacheBackend::Memory {
        tracing::warn!("using in-memory cache; entries are dropped when the command exits");
    }
    Ok(CacheMatcher::new(config.open_store()?))
}
