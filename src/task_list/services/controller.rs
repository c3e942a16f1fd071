//! Controller owning the editing state and driving persistence.

use crate::task_list::{
    domain::{Task, TaskListAction, TaskListState, Transition},
    ports::KeyValueStore,
    services::store::{TaskStore, TaskStoreResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Orchestrates task-list edits: applies actions through the pure reducer
/// and writes the list back to storage after every mutating edit.
///
/// Persistence is awaited before the next edit can be issued through the
/// same controller, so writes reach the capability one at a time and in
/// edit order. The original application fired writes without awaiting them,
/// which allowed overlapping writes to race; serialising here closes that
/// gap.
#[derive(Clone)]
pub struct TaskListController<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: TaskStore<S, C>,
    clock: Arc<C>,
    state: TaskListState,
}

impl<S, C> TaskListController<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty task list and input buffer.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store: TaskStore::new(store, Arc::clone(&clock)),
            clock,
            state: TaskListState::new(),
        }
    }

    /// Returns the current editing state.
    #[must_use]
    pub const fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// Returns the uncommitted input buffer.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        self.state.pending_input()
    }

    /// Loads persisted tasks into the controller.
    ///
    /// Called once at startup. A failed read is treated the same as no data
    /// having been stored yet: the controller starts from the empty list.
    /// The pending input buffer is left untouched.
    pub async fn hydrate(&mut self) {
        let tasks = self.store.load().await.unwrap_or_default();
        self.apply(TaskListAction::Hydrate(tasks));
    }

    /// Replaces the pending input buffer.
    ///
    /// Uncommitted input is never persisted, so this touches no storage.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.apply(TaskListAction::SetPendingInput(text.into()));
    }

    /// Commits the pending input as a new task at the end of the list.
    ///
    /// When the input trims to nothing the edit is a silent no-op and the
    /// store is not touched. Otherwise the raw (untrimmed) input becomes
    /// the task text, the buffer is cleared, and the list is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task_list::services::TaskStoreError`] when the
    /// write fails. The in-memory list keeps the new task regardless.
    pub async fn add_task(&mut self) -> TaskStoreResult<()> {
        if self.apply(TaskListAction::AddTask) {
            self.store.persist(self.state.tasks()).await?;
        }
        Ok(())
    }

    /// Removes the task at the given zero-based display position.
    ///
    /// Positions of later tasks shift down by one. An out-of-range position
    /// is a silent no-op and the store is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task_list::services::TaskStoreError`] when the
    /// write fails. The in-memory list stays without the task regardless.
    pub async fn delete_task(&mut self, index: usize) -> TaskStoreResult<()> {
        if self.apply(TaskListAction::DeleteTask { index }) {
            self.store.persist(self.state.tasks()).await?;
        }
        Ok(())
    }

    /// Applies an action to the owned state, returning whether the task
    /// list changed and needs to be written out.
    fn apply(&mut self, action: TaskListAction) -> bool {
        let Transition { state, persist } = self.state.apply(action, self.clock.as_ref());
        self.state = state;
        persist
    }
}
