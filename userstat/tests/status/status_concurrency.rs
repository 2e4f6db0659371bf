use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::Instant;
use userstat::Aggregator;
use userstat_mock::MockUpstream;

#[tokio::test(start_paused = true)]
async fn concurrent_calls_do_not_interfere() {
    let agg = Arc::new(
        Aggregator::builder()
            .with_upstream(Arc::new(MockUpstream::new()))
            .build()
            .unwrap(),
    );

    let ids: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    let start = Instant::now();
    let results = join_all(ids.iter().map(|id| {
        let agg = Arc::clone(&agg);
        async move { agg.user_status(id).await }
    }))
    .await;

    assert!(start.elapsed() < Duration::from_millis(400));
    for (id, res) in ids.iter().zip(results) {
        let status = res.unwrap();
        assert_eq!(&status.id, id);
        assert_eq!(status.name, format!("user{id}"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn status_future_is_send() {
    let agg = Arc::new(
        Aggregator::builder()
            .with_upstream(Arc::new(MockUpstream::instant()))
            .build()
            .unwrap(),
    );
    let handle = tokio::spawn({
        let agg = Arc::clone(&agg);
        async move { agg.user_status("3").await }
    });
    let status = handle.await.unwrap().unwrap();
    assert_eq!(status.name, "user3");
}
