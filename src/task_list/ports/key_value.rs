//! Key-value storage port used to persist the task list.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueStoreResult<T> = Result<T, KeyValueStoreError>;

/// External key-value persistence capability.
///
/// The task-list core uses exactly one fixed key, but the contract is a
/// plain string-to-string store so adapters stay reusable.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key yet.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Read`] when the underlying storage
    /// fails for any reason other than the key being absent.
    async fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Write`] when the underlying storage
    /// rejects the write.
    async fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// Reading a key failed.
    #[error("read of key '{key}' failed: {source}")]
    Read {
        /// Key whose read failed.
        key: String,
        /// Underlying storage failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Writing a key failed.
    #[error("write of key '{key}' failed: {source}")]
    Write {
        /// Key whose write failed.
        key: String,
        /// Underlying storage failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl KeyValueStoreError {
    /// Wraps a read failure.
    pub fn read(
        key: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Read {
            key: key.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a write failure.
    pub fn write(
        key: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Write {
            key: key.into(),
            source: Arc::new(err),
        }
    }
}
