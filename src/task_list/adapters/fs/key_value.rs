//! Capability-scoped filesystem key-value store.
//!
//! Stores each key as a file inside a directory opened once at
//! construction. Access never escapes that directory, which stands in for
//! the platform's app-private storage area.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::task_list::ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};

/// Key-value store backed by one file per key inside a single directory.
#[derive(Debug, Clone)]
pub struct DirKeyValueStore {
    root: Arc<Dir>,
}

impl DirKeyValueStore {
    /// Opens the store rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be opened.
    pub fn open_ambient(path: &Utf8Path) -> std::io::Result<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            root: Arc::new(root),
        })
    }

    /// Wraps an already opened capability directory.
    #[must_use]
    pub fn from_dir(root: Dir) -> Self {
        Self {
            root: Arc::new(root),
        }
    }
}

#[async_trait]
impl KeyValueStore for DirKeyValueStore {
    async fn get(&self, key: &str) -> KeyValueStoreResult<Option<String>> {
        match self.root.read_to_string(key) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::read(key, err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> KeyValueStoreResult<()> {
        self.root
            .write(key, value)
            .map_err(|err| KeyValueStoreError::write(key, err))
    }
}
