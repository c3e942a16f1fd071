//! Pure state machine for task-list editing.
//!
//! All edits are expressed as actions applied to an immutable state value.
//! [`TaskListState::apply`] returns the successor state together with a flag
//! saying whether the edit changed the task list and therefore needs to be
//! persisted. Keeping the reducer pure lets tests exercise every edge case
//! without a storage capability in sight.

use super::Task;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Edit actions accepted by the task-list state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    /// Replace the pending input buffer unconditionally.
    SetPendingInput(String),
    /// Commit the pending input as a new task at the end of the list.
    AddTask,
    /// Remove the task at the given zero-based display position.
    DeleteTask {
        /// Display position of the task to remove.
        index: usize,
    },
    /// Replace the task list with freshly loaded tasks.
    Hydrate(Vec<Task>),
}

/// Outcome of applying an action to a [`TaskListState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The successor state.
    pub state: TaskListState,
    /// Whether the task list changed and must be written to storage.
    pub persist: bool,
}

/// In-memory editing state: the ordered task list plus the uncommitted
/// input buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    tasks: Vec<Task>,
    pending_input: String,
}

impl TaskListState {
    /// Creates an empty state with no tasks and no pending input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding the given tasks and no pending input.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            pending_input: String::new(),
        }
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the uncommitted input buffer.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Applies an edit action, producing the successor state.
    ///
    /// Actions that leave the task list unchanged report `persist: false`:
    /// input-buffer updates, hydration, committing a whitespace-only input,
    /// and deleting an out-of-range position. The last two are silent
    /// no-ops, matching the original application's behaviour.
    #[must_use]
    pub fn apply(&self, action: TaskListAction, clock: &impl Clock) -> Transition {
        match action {
            TaskListAction::SetPendingInput(text) => Transition {
                state: Self {
                    tasks: self.tasks.clone(),
                    pending_input: text,
                },
                persist: false,
            },
            TaskListAction::AddTask => self.apply_add(clock),
            TaskListAction::DeleteTask { index } => self.apply_delete(index),
            TaskListAction::Hydrate(tasks) => Transition {
                state: Self {
                    tasks,
                    pending_input: self.pending_input.clone(),
                },
                persist: false,
            },
        }
    }

    fn apply_add(&self, clock: &impl Clock) -> Transition {
        if self.pending_input.trim().is_empty() {
            return Transition {
                state: self.clone(),
                persist: false,
            };
        }

        // The committed text is the raw buffer, untrimmed.
        let mut tasks = self.tasks.clone();
        tasks.push(Task::new(self.pending_input.clone(), clock));
        Transition {
            state: Self {
                tasks,
                pending_input: String::new(),
            },
            persist: true,
        }
    }

    fn apply_delete(&self, index: usize) -> Transition {
        if index >= self.tasks.len() {
            return Transition {
                state: self.clone(),
                persist: false,
            };
        }

        let mut tasks = self.tasks.clone();
        tasks.remove(index);
        Transition {
            state: Self {
                tasks,
                pending_input: self.pending_input.clone(),
            },
            persist: true,
        }
    }
}
