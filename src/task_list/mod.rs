//! Task-list editing and persistence for Ticklist.
//!
//! This module implements the whole behavioural surface of the application:
//! decoding and encoding the separator-joined persisted representation,
//! applying add/delete mutations through a pure state reducer, and reading
//! and writing the list through a key-value storage port under a single
//! fixed key. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
