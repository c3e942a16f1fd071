//! Domain model for task-list editing.
//!
//! The domain covers the task record itself, the wire codec used for the
//! persisted representation, and the pure state machine that applies edits,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod codec;
mod ids;
mod state;
mod task;

pub use codec::{SEPARATOR, decode, encode};
pub use ids::TaskId;
pub use state::{TaskListAction, TaskListState, Transition};
pub use task::Task;
