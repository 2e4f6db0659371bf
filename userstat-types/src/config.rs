//! Configuration shared by the aggregator and its builders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Aggregator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Overall deadline for one `user_status` call, covering all three fetches.
    ///
    /// A fetch still pending when it expires is cancelled and its kind is
    /// reported as failed.
    pub request_timeout: Duration,
}

impl AggregatorConfig {
    /// Default overall deadline.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
