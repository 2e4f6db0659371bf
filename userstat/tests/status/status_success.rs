use rust_decimal::Decimal;
use userstat::{ResourceKind, total_debt};
use userstat_mock::{DEBTS, FIXED_AMOUNT};

use crate::helpers::{fixture_aggregator, scripted};

#[tokio::test(start_paused = true)]
async fn fixture_status_is_fully_populated() {
    let agg = fixture_aggregator();
    let status = agg.user_status("2").await.expect("status");

    assert_eq!(status.id, "2");
    assert_eq!(status.name, "user2");
    assert_eq!(status.balance_amount, FIXED_AMOUNT);
    let ids: Vec<_> = status.debts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, DEBTS.map(|(id, _, _)| id));
    assert!(status.debts.iter().all(|d| d.reason == "chargeback"));
    assert_eq!(total_debt(&status.debts), Some(Decimal::new(1295, 1)));
}

#[tokio::test(start_paused = true)]
async fn balance_amount_is_passed_through_verbatim() {
    let agg = fixture_aggregator();
    let status = agg.user_status("2").await.unwrap();
    assert_eq!(status.balance_amount, "42,17");
    assert_eq!(status.balance_decimal(), Some(Decimal::new(4217, 2)));
}

#[tokio::test]
async fn each_kind_is_fetched_once_for_the_requested_user() {
    let (agg, ctrl) = scripted(std::time::Duration::from_secs(1)).await;
    let status = agg.user_status("7").await.unwrap();
    assert_eq!(status.name, "user7");

    let mut calls = ctrl.calls().await;
    calls.sort_by_key(|(kind, _)| kind.as_str());
    let kinds: Vec<_> = calls.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        [ResourceKind::Balance, ResourceKind::Debts, ResourceKind::Identity]
    );
    assert!(calls.iter().all(|(_, id)| id.as_str() == "7"));
}

#[tokio::test(start_paused = true)]
async fn repeated_calls_are_idempotent() {
    let agg = fixture_aggregator();
    let first = agg.user_status("2").await.unwrap();
    let second = agg.user_status("2").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_debt_list_is_a_success() {
    let (agg, ctrl) = scripted(std::time::Duration::from_secs(1)).await;
    ctrl.set_behavior(ResourceKind::Debts, userstat_mock::MockBehavior::body("[]"))
        .await;
    let status = agg.user_status("7").await.unwrap();
    assert!(status.debts.is_empty());
    assert_eq!(status.balance_amount, "10,50");
}
