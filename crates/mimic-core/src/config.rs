//! Cache backend configuration.
//!
//! ```yaml
//! backend: sqlite      # or "memory" (default)
//! path: .mimic/cache.db
//! ```
//!
//! # Environment Variables
//!
//! - `MIMIC_CACHE_BACKEND`: `memory` or `sqlite`, overrides the file value
//! - `MIMIC_CACHE_PATH`: SQLite database path, overrides the file value

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::{ByteStore, InMemoryStore, SqliteStore};

pub const ENV_BACKEND: &str = "MIMIC_CACHE_BACKEND";
pub const ENV_PATH: &str = "MIMIC_CACHE_PATH";

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    #[default]
    Memory,
    Sqlite,
}

impl CacheBackend {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "memory" => Some(CacheBackend::Memory),
            "sqlite" => Some(CacheBackend::Sqlite),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub backend: CacheBackend,

    /// Database file for the sqlite backend. Ignored by `memory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CacheConfig {
    pub fn memory() -> Self {
        Self::default()
    }

    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: CacheBackend::Sqlite,
            path: Some(path.into()),
        }
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).context("failed to parse cache config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cache config {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Applies `MIMIC_CACHE_BACKEND` / `MIMIC_CACHE_PATH` on top of this config.
    pub fn apply_env(mut self) -> anyhow::Result<Self> {
        if let Ok(raw) = env::var(ENV_BACKEND) {
            self.backend = CacheBackend::parse(&raw)
                .with_context(|| format!("invalid {ENV_BACKEND} value '{raw}'"))?;
        }
        if let Ok(raw) = env::var(ENV_PATH) {
            if !raw.trim().is_empty() {
                self.path = Some(PathBuf::from(raw));
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.backend == CacheBackend::Sqlite && self.path.is_none() {
            return Err("sqlite cache backend requires a database path".to_string());
        }
        Ok(())
    }

    /// Builds the configured store.
    pub fn open_store(&self) -> anyhow::Result<Arc<dyn ByteStore>> {
        match self.backend {
            CacheBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
            CacheBackend::Sqlite => {
                let path = self
                    .path
                    .as_deref()
                    .context("sqlite cache backend requires a database path")?;
                let store = SqliteStore::open(path)
                    .with_context(|| format!("failed to open cache db {}", path.display()))?;
                tracing::debug!(path = %path.display(), "opened sqlite cache");
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        env::remove_var(ENV_BACKEND);
        env::remove_var(ENV_PATH);
    }

    #[test]
    fn test_defaults_to_memory() {
        let cfg = CacheConfig::from_yaml_str("").unwrap();
        assert_eq!(cfg, CacheConfig::memory());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_parse_sqlite_yaml() {
        let cfg = CacheConfig::from_yaml_str("backend: sqlite\npath: /tmp/mimic.db\n").unwrap();
        assert_eq!(cfg.backend, CacheBackend::Sqlite);
        assert_eq!(cfg.path, Some(PathBuf::from("/tmp/mimic.db")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(CacheConfig::from_yaml_str("backnd: sqlite\n").is_err());
    }

    #[test]
    fn test_sqlite_without_path_is_invalid() {
        let cfg = CacheConfig {
            backend: CacheBackend::Sqlite,
            path: None,
        };
        assert!(cfg.validate().is_err());
        assert!(cfg.open_store().is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(ENV_BACKEND, "SQLite");
        env::set_var(ENV_PATH, "/var/lib/mimic/cache.db");

        let cfg = CacheConfig::memory().apply_env().unwrap();
        assert_eq!(cfg.backend, CacheBackend::Sqlite);
        assert_eq!(cfg.path, Some(PathBuf::from("/var/lib/mimic/cache.db")));

        env::set_var(ENV_BACKEND, "redis");
        assert!(CacheConfig::memory().apply_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_absent_keeps_file_values() {
        clear_env();
        let cfg = CacheConfig::sqlite("/tmp/x.db").apply_env().unwrap();
        assert_eq!(cfg, CacheConfig::sqlite("/tmp/x.db"));
    }

    #[test]
    fn test_open_stores() {
        let memory = CacheConfig::memory().open_store().unwrap();
        memory.set(b"k", b"v").unwrap();
        assert_eq!(memory.get(b"k").unwrap(), b"v");

        let tmp = TempDir::new().unwrap();
        let sqlite = CacheConfig::sqlite(tmp.path().join("cache.db"))
            .open_store()
            .unwrap();
        sqlite.set(b"k", b"v").unwrap();
        assert_eq!(sqlite.len().unwrap(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("mimic.yaml");
        std::fs::write(&file, "backend: memory\n").unwrap();
        assert_eq!(CacheConfig::load(&file).unwrap(), CacheConfig::memory());
    }
}
