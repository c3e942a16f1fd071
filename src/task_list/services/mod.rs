//! Application services for task-list editing and persistence.

mod controller;
mod store;

pub use controller::TaskListController;
pub use store::{TASK_LIST_KEY, TaskStore, TaskStoreError, TaskStoreResult};
