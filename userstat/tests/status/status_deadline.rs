use std::time::Duration;

use tokio::time::Instant;
use userstat::{FetchError, ResourceKind, ResourceKinds, TransportError, UserStatusError};
use userstat_mock::MockBehavior;

use crate::helpers::{balance_body, fixture_aggregator, scripted};

#[tokio::test(start_paused = true)]
async fn latency_follows_the_slowest_request() {
    let agg = fixture_aggregator();
    let start = Instant::now();
    agg.user_status("2").await.unwrap();
    let elapsed = start.elapsed();

    // 150 + 350 + 350 if run sequentially
    assert!(elapsed >= Duration::from_millis(350), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(400), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn hanging_upstream_is_cut_at_the_deadline() {
    let (agg, ctrl) = scripted(Duration::from_millis(500)).await;
    ctrl.set_behavior(ResourceKind::Debts, MockBehavior::Hang).await;

    let start = Instant::now();
    let err = agg.user_status("7").await.unwrap_err();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(550), "{elapsed:?}");
    assert_eq!(err.failed_kinds(), ResourceKinds::DEBTS);
    let UserStatusError::Aggregation(agg_err) = err else {
        panic!("expected aggregation error");
    };
    assert_eq!(
        agg_err.causes,
        [FetchError::Transport(TransportError::timed_out(ResourceKind::Debts))]
    );
    assert_eq!(agg_err.partial.name, "user7");
    assert_eq!(ctrl.in_flight(), 0, "timed out fetch must be dropped");
}

#[tokio::test(start_paused = true)]
async fn slow_response_past_the_deadline_times_out() {
    let (agg, ctrl) = scripted(Duration::from_millis(200)).await;
    ctrl.set_behavior(
        ResourceKind::Balance,
        MockBehavior::delayed(balance_body("7", "1,00"), Duration::from_millis(300)),
    )
    .await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::BALANCE);
    assert_eq!(ctrl.in_flight(), 0);
}

#[tokio::test(start_paused = true)]
async fn deadline_is_shared_across_kinds() {
    let (agg, ctrl) = scripted(Duration::from_millis(300)).await;
    ctrl.set_behavior(
        ResourceKind::Balance,
        MockBehavior::delayed(balance_body("7", "1,00"), Duration::from_millis(250)),
    )
    .await;
    ctrl.set_behavior(ResourceKind::Identity, MockBehavior::Hang).await;

    let err = agg.user_status("7").await.unwrap_err();
    assert_eq!(err.failed_kinds(), ResourceKinds::IDENTITY);
    assert_eq!(err.partial().unwrap().balance_amount, "1,00");
}

#[tokio::test(start_paused = true)]
async fn oversized_timeout_behaves_as_no_deadline() {
    let agg = userstat::Aggregator::builder()
        .with_upstream(std::sync::Arc::new(userstat_mock::MockUpstream::instant()))
        .request_timeout(Duration::MAX)
        .build()
        .unwrap();

    let status = agg.user_status("2").await.expect("status");
    assert_eq!(status.name, "user2");
}

#[tokio::test(start_paused = true)]
async fn oversized_timeout_still_waits_for_slow_kinds() {
    let (agg, ctrl) = scripted(Duration::MAX).await;
    ctrl.set_behavior(
        ResourceKind::Balance,
        MockBehavior::delayed(balance_body("7", "3,00"), Duration::from_secs(60)),
    )
    .await;

    let status = agg.user_status("7").await.unwrap();
    assert_eq!(status.balance_amount, "3,00");
}
