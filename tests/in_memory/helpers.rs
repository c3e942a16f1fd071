//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use ticklist::task_list::{
    adapters::memory::InMemoryKeyValueStore, services::TaskListController,
};

/// Controller type used by the in-memory suites.
pub type TestController = TaskListController<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh shared in-memory capability for each test.
#[fixture]
pub fn kv() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Builds a controller over the given capability.
#[must_use]
pub fn controller_over(kv: &Arc<InMemoryKeyValueStore>) -> TestController {
    TaskListController::new(Arc::clone(kv), Arc::new(DefaultClock))
}

/// Collects the task texts in display order.
#[must_use]
pub fn texts(controller: &TestController) -> Vec<String> {
    controller
        .tasks()
        .iter()
        .map(|task| task.text().to_owned())
        .collect()
}
