//! Task store: the bridge between the task list and its persisted form.

use crate::task_list::{
    domain::{Task, decode, encode},
    ports::{KeyValueStore, KeyValueStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Fixed storage key under which the whole task list is persisted.
pub const TASK_LIST_KEY: &str = "TASKS";

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The key-value capability failed.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),
}

/// Reads and writes the task list through a key-value capability.
///
/// Every write replaces the whole list under [`TASK_LIST_KEY`]; there is no
/// per-task storage. Writing the same list twice leaves the stored string
/// unchanged.
#[derive(Clone)]
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a task store over the given capability and clock.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Loads and decodes the persisted task list.
    ///
    /// An absent key decodes to the empty list. Hydrated tasks carry fresh
    /// identifiers and load-time timestamps; only text is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Store`] when the capability's read fails.
    /// Callers following the original application's policy treat that the
    /// same as an absent key.
    pub async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let raw = self.store.get(TASK_LIST_KEY).await?;
        Ok(decode(raw.as_deref(), self.clock.as_ref()))
    }

    /// Encodes and writes the task list, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Store`] when the capability's write fails.
    /// In-memory state is unaffected either way; a failed write simply
    /// leaves storage behind the in-memory list.
    pub async fn persist(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        self.store.set(TASK_LIST_KEY, &encode(tasks)).await?;
        Ok(())
    }
}
