//! In-memory [`Storage`] engine backed by [`DashMap`].
//!
//! Provides concurrent read/write access without external locking.
//! Data lives for the lifetime of the instance; there is no
//! persistence across process restarts.

use dashmap::DashMap;

use crate::storage::engine::Storage;
use crate::storage::error::StorageError;

/// Terminal key-value store holding physical bytes in process memory.
///
/// `put` is an unconditional upsert; `get` fails with
/// [`StorageError::NotFound`] for absent keys. The engine stores only
/// the bytes it is handed and has no knowledge of any transform applied
/// by layers above it.
///
/// `DashMap`'s internal sharding makes concurrent put/get on one
/// instance safe without callers serializing access.
pub struct InMemoryStorage {
    entries: DashMap<String, Vec<u8>>,
}

impl InMemoryStorage {
    /// Creates a new, empty `InMemoryStorage`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }
}
