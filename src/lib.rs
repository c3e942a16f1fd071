//! Ticklist: a minimal task-list core with pluggable persistence.
//!
//! This crate provides the editing and persistence logic behind a
//! single-screen to-do list: an ordered list of tasks, a pending-input
//! buffer, add/delete mutations, and storage of the list through an
//! external key-value capability under one fixed key.
//!
//! # Architecture
//!
//! Ticklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure editing logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, memory)
//!
//! # Modules
//!
//! - [`task_list`]: Task records, the wire codec, and the list controller

pub mod task_list;
