//! Adapter implementations of the task-list ports.

pub mod fs;
pub mod memory;
