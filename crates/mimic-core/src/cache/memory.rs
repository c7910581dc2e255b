use std::collections::HashMap;
use std::sync::RwLock;

use super::{ByteStore, StoreError, StoreResult};

/// Process-local store. Cheap to create, so tests build a fresh one per case.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for InMemoryStore {
    fn set(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn get_all_keys(&self) -> StoreResult<Vec<Vec<u8>>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.keys().cloned().collect())
    }

    fn delete_all(&self) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }
}
