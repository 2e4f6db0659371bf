use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use userstat::{Aggregator, Upstream, UserStatusError};
use userstat_http::HttpUpstream;

fn upstream(address: Option<&str>) -> Result<Arc<dyn Upstream>, UserStatusError> {
    match address {
        Some(addr) if std::env::var("USERSTAT_EXAMPLES_USE_MOCK").is_err() => {
            Ok(Arc::new(HttpUpstream::new(addr)?))
        }
        _ => {
            println!("--- (Using in-process mock upstream) ---");
            Ok(Arc::new(userstat_mock::MockUpstream::new()))
        }
    }
}

/// Usage: `cargo run -p userstat-http --example user_status -- [SERVER_ADDRESS] [USER_ID]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let address = args.next();
    let user_id = args.next().unwrap_or_else(|| "2".to_string());

    // 1. Pick the upstream and build the aggregator.
    let agg = Aggregator::builder()
        .with_upstream(upstream(address.as_deref())?)
        .build()?;

    // 2. Fetch. Partial results are still printed when some kinds fail.
    let started = std::time::Instant::now();
    match agg.user_status(&user_id).await {
        Ok(status) => println!("{status:#?}"),
        Err(e) => {
            println!("error: {e}");
            if let Some(partial) = e.partial() {
                println!("partial: {partial:#?}");
            }
        }
    }
    println!("took {:?}", started.elapsed());

    Ok(())
}
