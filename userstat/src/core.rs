use std::sync::Arc;
use std::time::Duration;

use userstat_core::{AggregatorConfig, Upstream, UserStatusError};

/// Orchestrator that fans a user status request out to one upstream.
///
/// Cheap to share: all per-request state lives inside each `user_status` call.
pub struct Aggregator {
    pub(crate) upstream: Arc<dyn Upstream>,
    pub(crate) cfg: AggregatorConfig,
}

/// Builder for constructing an `Aggregator` with custom configuration.
pub struct AggregatorBuilder {
    upstream: Option<Arc<dyn Upstream>>,
    cfg: AggregatorConfig,
}

impl Default for AggregatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregatorBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no upstream; you must register one via [`Self::with_upstream`].
    /// - The overall request deadline defaults to
    ///   [`AggregatorConfig::DEFAULT_REQUEST_TIMEOUT`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            upstream: None,
            cfg: AggregatorConfig::default(),
        }
    }

    /// Register the upstream serving identity, balance and debts.
    ///
    /// Registering again replaces the previous upstream.
    #[must_use]
    pub fn with_upstream(mut self, upstream: Arc<dyn Upstream>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: AggregatorConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the overall deadline for one `user_status` call.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency even when an upstream never answers.
    /// - Fetches still pending at the deadline are cancelled and reported as
    ///   timed out; fetches that finished in time keep their results.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Build the `Aggregator`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no upstream has been registered via
    /// [`Self::with_upstream`] or the request timeout is zero.
    pub fn build(self) -> Result<Aggregator, UserStatusError> {
        let Some(upstream) = self.upstream else {
            return Err(UserStatusError::InvalidArg(
                "no upstream registered; add one via with_upstream(...)".to_string(),
            ));
        };
        if self.cfg.request_timeout.is_zero() {
            return Err(UserStatusError::InvalidArg(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Aggregator {
            upstream,
            cfg: self.cfg,
        })
    }
}

impl Aggregator {
    /// Start building a new `Aggregator`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let agg = userstat::Aggregator::builder()
    ///     .with_upstream(Arc::new(userstat_mock::MockUpstream::new()))
    ///     .request_timeout(Duration::from_secs(2))
    ///     .build()?;
    /// let status = agg.user_status("2").await?;
    /// ```
    #[must_use]
    pub fn builder() -> AggregatorBuilder {
        AggregatorBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.cfg
    }

    /// Name of the registered upstream.
    #[must_use]
    pub fn upstream_name(&self) -> &'static str {
        self.upstream.name()
    }
}
