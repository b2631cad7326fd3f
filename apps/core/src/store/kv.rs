use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::CoachError;

/// Defines the public interface of the persistent key-value blob store.
///
/// This trait abstracts the storage backend, allowing the conversation log
/// to persist through SQLite, an in-memory map in tests, or whatever the
/// host application provides.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Reads the blob stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoachError>;

    /// Stores `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CoachError>;

    /// Deletes the blob stored under `key`. Deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<(), CoachError>;
}

/// In-memory store used by tests and as a no-persistence default.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoachError> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CoachError> {
        self.entries().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CoachError> {
        self.entries().remove(key);
        Ok(())
    }
}
