use std::sync::Arc;
use std::time::Duration;

use userstat::{Aggregator, AggregatorConfig, UserStatusError};
use userstat_mock::MockUpstream;

#[test]
fn build_requires_an_upstream() {
    let err = Aggregator::builder().build().err().expect("missing upstream");
    assert!(matches!(err, UserStatusError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_timeout() {
    let err = Aggregator::builder()
        .with_upstream(Arc::new(MockUpstream::instant()))
        .request_timeout(Duration::ZERO)
        .build()
        .err()
        .expect("zero timeout");
    assert!(matches!(err, UserStatusError::InvalidArg(_)));
}

#[test]
fn defaults_and_overrides() {
    let agg = Aggregator::builder()
        .with_upstream(Arc::new(MockUpstream::instant()))
        .build()
        .unwrap();
    assert_eq!(
        agg.config().request_timeout,
        AggregatorConfig::DEFAULT_REQUEST_TIMEOUT
    );
    assert_eq!(agg.upstream_name(), "userstat-mock");

    let agg = Aggregator::builder()
        .with_upstream(Arc::new(MockUpstream::instant()))
        .config(AggregatorConfig {
            request_timeout: Duration::from_millis(750),
        })
        .build()
        .unwrap();
    assert_eq!(agg.config().request_timeout, Duration::from_millis(750));
}
