//! Integration tests for add/delete editing flows.

use std::sync::Arc;

use super::helpers::{controller_over, kv, texts};
use rstest::rstest;
use ticklist::task_list::{adapters::memory::InMemoryKeyValueStore, services::TASK_LIST_KEY};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adding_tasks_persists_after_every_commit(kv: Arc<InMemoryKeyValueStore>) {
    let mut controller = controller_over(&kv);
    controller.hydrate().await;

    controller.set_pending_input("Buy milk");
    controller.add_task().await.expect("first add");
    let after_first = kv.snapshot(TASK_LIST_KEY).expect("snapshot");
    controller.set_pending_input("Walk dog");
    controller.add_task().await.expect("second add");
    let after_second = kv.snapshot(TASK_LIST_KEY).expect("snapshot");

    assert_eq!(after_first.as_deref(), Some("Buy milk"));
    assert_eq!(after_second.as_deref(), Some("Buy milk||Walk dog"));
    assert_eq!(texts(&controller), vec!["Buy milk", "Walk dog"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn whitespace_only_input_commits_nothing(kv: Arc<InMemoryKeyValueStore>) {
    let mut controller = controller_over(&kv);
    controller.hydrate().await;

    controller.set_pending_input("   ");
    controller.add_task().await.expect("no-op add");

    assert!(controller.tasks().is_empty());
    assert_eq!(kv.snapshot(TASK_LIST_KEY).expect("snapshot"), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_middle_task_shifts_later_positions(kv: Arc<InMemoryKeyValueStore>) {
    let mut controller = controller_over(&kv);
    for text in ["A", "B", "C"] {
        controller.set_pending_input(text);
        controller.add_task().await.expect("add");
    }

    controller.delete_task(1).await.expect("delete");

    assert_eq!(texts(&controller), vec!["A", "C"]);
    let stored = kv.snapshot(TASK_LIST_KEY).expect("snapshot");
    assert_eq!(stored.as_deref(), Some("A||C"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_the_last_task_stores_the_empty_string(kv: Arc<InMemoryKeyValueStore>) {
    let mut controller = controller_over(&kv);
    controller.set_pending_input("solo");
    controller.add_task().await.expect("add");

    controller.delete_task(0).await.expect("delete");

    assert!(controller.tasks().is_empty());
    let stored = kv.snapshot(TASK_LIST_KEY).expect("snapshot");
    assert_eq!(stored.as_deref(), Some(""));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_texts_are_allowed(kv: Arc<InMemoryKeyValueStore>) {
    let mut controller = controller_over(&kv);
    for _ in 0..2 {
        controller.set_pending_input("same");
        controller.add_task().await.expect("add");
    }

    assert_eq!(texts(&controller), vec!["same", "same"]);
    let first = controller.tasks().first().map(|task| task.id());
    let second = controller.tasks().get(1).map(|task| task.id());
    assert_ne!(first, second);
}
