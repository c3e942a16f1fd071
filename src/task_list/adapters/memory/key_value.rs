//! In-memory key-value store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task_list::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a clone handed to a service
/// observes the service's writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the value stored under `key`, bypassing the
    /// async port. Intended for test assertions.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Read`] when the lock is poisoned.
    pub fn snapshot(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::read(key, std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueStoreError::read(key, std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueStoreError::write(key, std::io::Error::other(err.to_string())))?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
