//! Port contracts for task-list persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task-list
//! services.

pub mod key_value;

pub use key_value::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult};
