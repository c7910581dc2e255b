//! SQLite-backed store: one table of opaque key/value blobs.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ByteStore, StoreError, StoreResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cache_entries (
    key   BLOB PRIMARY KEY,
    value BLOB NOT NULL
);
";

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file and its schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ByteStore for SqliteStore {
    fn set(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO cache_entries(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM cache_entries WHERE key = ?1",
            params![key],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .optional()?
        .ok_or_else(|| StoreError::not_found(key))
    }

    fn get_all_keys(&self) -> StoreResult<Vec<Vec<u8>>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT key FROM cache_entries")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, Vec<u8>>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    fn delete_all(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM cache_entries", [])?;
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cache_entries", [], |row| {
            row.get(0)
        })?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
