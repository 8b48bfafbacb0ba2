use super::*;
use crate::net::types::AccountStatus;
use crate::panels::test_helpers::{FakeApi, RecordingNotifier, account};

fn seeded() -> Arc<FakeApi> {
    let api = FakeApi::new();
    api.backend().accounts = vec![account(1, "xhs", AccountStatus::Active), account(2, "douyin", AccountStatus::Active)];
    api
}

// =============================================================
// Unbind
// =============================================================

#[tokio::test]
async fn declining_unbind_sends_no_delete() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(false);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    assert_eq!(panel.unbind(1).await, Outcome::Declined);
    assert!(api.calls().is_empty());
    assert_eq!(notifier.confirms(), vec![messages::unbind_confirm("User_1")]);
    assert_eq!(panel.state().accounts.len(), 2);
}

#[tokio::test]
async fn confirmed_unbind_deletes_and_refetches() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    assert_eq!(panel.unbind(1).await, Outcome::Done);
    assert_eq!(api.calls(), vec!["DELETE /accounts/1", "GET /accounts/list"]);
    assert!(panel.state().find(1).is_none());
    assert!(panel.state().unbinding.is_none());
    assert_eq!(notifier.last_alert().as_deref(), Some(messages::UNBIND_DONE));
}

#[tokio::test]
async fn unbind_failure_keeps_list() {
    let api = seeded();
    api.fail("unbind_account", None);
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;

    assert_eq!(panel.unbind(2).await, Outcome::Failed);
    assert_eq!(panel.state().accounts.len(), 2);
    assert!(panel.state().unbinding.is_none());
    assert_eq!(notifier.last_alert().as_deref(), Some(messages::UNBIND_FAILED));
}

#[tokio::test]
async fn unbinding_unknown_account_is_rejected() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    assert_eq!(panel.unbind(42).await, Outcome::Rejected);
    assert!(api.calls().is_empty());
    assert!(notifier.confirms().is_empty());
}

// =============================================================
// Bind
// =============================================================

#[tokio::test]
async fn bind_posts_platform_and_refetches() {
    let api = FakeApi::new();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    assert_eq!(panel.bind("xhs").await, Outcome::Done);
    assert_eq!(api.calls(), vec!["POST /accounts/bind/xhs", "GET /accounts/list"]);
    assert_eq!(panel.state().accounts.len(), 1);
    assert_eq!(panel.state().accounts[0].platform, "xhs");
    assert!(!panel.state().binding);
    assert_eq!(notifier.alerts(), vec![messages::BIND_STARTED, messages::BIND_DONE]);
}

#[tokio::test]
async fn bind_failure_alerts_generic_message() {
    let api = FakeApi::new();
    api.fail("bind_account", Some("Timeout 120000ms exceeded"));
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    assert_eq!(panel.bind("xhs").await, Outcome::Failed);
    assert_eq!(api.calls(), vec!["POST /accounts/bind/xhs"]);
    assert!(!panel.state().binding);
    assert_eq!(notifier.last_alert().as_deref(), Some(messages::BIND_FAILED));
}

// =============================================================
// In-flight guards
// =============================================================

#[tokio::test]
async fn bind_in_flight_blocks_second_bind() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    panel.state.binding = true;
    assert_eq!(panel.bind("xhs").await, Outcome::Disabled);
    assert!(api.calls().is_empty());
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn unbind_in_flight_blocks_second_unbind() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.mount().await;
    api.clear_calls();

    panel.state.unbinding = Some(1);
    assert_eq!(panel.unbind(2).await, Outcome::Disabled);
    assert!(api.calls().is_empty());
    assert!(notifier.confirms().is_empty());
}

#[tokio::test]
async fn remount_clears_stale_bind_flags() {
    let api = seeded();
    let notifier = RecordingNotifier::answering(true);
    let mut panel = DistributorPanel::new(api.clone(), notifier.clone());
    panel.state.binding = true;
    panel.state.unbinding = Some(1);

    assert_eq!(panel.mount().await, Outcome::Done);
    assert!(!panel.state().binding);
    assert!(panel.state().unbinding.is_none());
}
