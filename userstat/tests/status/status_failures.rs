use std::time::Duration;

use userstat::{FetchError, ResourceKind, ResourceKinds, TransportError, UserStatusError};
use userstat_mock::MockBehavior;

use crate::helpers::{debts_body, scripted};

#[tokio::test]
async fn one_failed_kind_is_named_and_partial_kept() {
    let (agg, ctrl) = scripted(Duration::from_secs(1)).await;
    ctrl.set_behavior(
        ResourceKind::Balance,
        MockBehavior::Fail(TransportError::status(ResourceKind::Balance, 503)),
    )
    .await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::BALANCE);
    let partial = err.partial().expect("partial");
    assert_eq!(partial.id, "7");
    assert_eq!(partial.name, "user7");
    assert_eq!(partial.balance_amount, "");
    assert_eq!(partial.debts.len(), 2);
}

#[tokio::test]
async fn all_failures_are_reported() {
    let (agg, ctrl) = scripted(Duration::from_secs(1)).await;
    ctrl.clear_all_behaviors().await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::all());

    let UserStatusError::Aggregation(agg_err) = err else {
        panic!("expected aggregation error");
    };
    assert_eq!(agg_err.causes.len(), 3);
    assert!(agg_err.causes.iter().all(|c| matches!(
        c,
        FetchError::Transport(TransportError::Status { status: 404, .. })
    )));
    assert!(agg_err.partial.is_empty());
}

#[tokio::test]
async fn malformed_payload_only_fails_its_own_kind() {
    let (agg, ctrl) = scripted(Duration::from_secs(1)).await;
    ctrl.set_behavior(ResourceKind::Identity, MockBehavior::body("<html>oops"))
        .await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::IDENTITY);

    let UserStatusError::Aggregation(agg_err) = err else {
        panic!("expected aggregation error");
    };
    assert!(matches!(
        agg_err.causes.as_slice(),
        [FetchError::Decode(d)] if d.kind == ResourceKind::Identity && d.len == 10
    ));
    assert_eq!(agg_err.partial.id, "");
    assert_eq!(agg_err.partial.balance_amount, "10,50");
}

#[tokio::test]
async fn malformed_debts_leave_identity_and_balance_intact() {
    let (agg, ctrl) = scripted(Duration::from_secs(1)).await;
    ctrl.set_behavior(
        ResourceKind::Debts,
        MockBehavior::body(r#"[{"id":"1","reason":"chargeback"}]"#),
    )
    .await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::DEBTS);

    let UserStatusError::Aggregation(agg_err) = err else {
        panic!("expected aggregation error");
    };
    assert!(matches!(
        agg_err.causes.as_slice(),
        [FetchError::Decode(d)] if d.kind == ResourceKind::Debts
    ));
    assert_eq!(agg_err.partial.id, "7");
    assert_eq!(agg_err.partial.name, "user7");
    assert_eq!(agg_err.partial.balance_amount, "10,50");
    assert!(agg_err.partial.debts.is_empty());
}

#[tokio::test]
async fn identity_and_debts_failures_are_both_named() {
    let (agg, ctrl) = scripted(Duration::from_secs(1)).await;
    ctrl.set_behavior(
        ResourceKind::Identity,
        MockBehavior::Fail(TransportError::request(ResourceKind::Identity, "connection refused")),
    )
    .await;
    ctrl.set_behavior(ResourceKind::Debts, MockBehavior::body(&debts_body()[1..]))
        .await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(
        err.failed_kinds(),
        ResourceKinds::IDENTITY | ResourceKinds::DEBTS
    );
    assert_eq!(
        err.to_string(),
        "user status incomplete, failed: identity, debts"
    );
}
