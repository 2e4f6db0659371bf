//! userstat-mock
//!
//! In-process upstreams for tests and examples:
//! - [`MockUpstream`] serves deterministic fixtures with per-kind latency,
//!   matching the demo server (identity after 150 ms, balance and
//!   debts after 350 ms).
//! - [`DynamicMockUpstream`] defers every call to a [`DynamicMockController`]
//!   that scripts responses, failures and hangs per resource kind.
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use userstat_core::{ResourceKind, TransportError, Upstream, UserId};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockUpstream, MockBehavior};
pub use fixtures::balance::FIXED_AMOUNT;
pub use fixtures::debts::DEBTS;

/// Mock upstream for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockUpstream {
    latency: [Duration; 3],
    balance_rng: Option<Mutex<StdRng>>,
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUpstream {
    /// Identity latency of the demo server.
    pub const IDENTITY_LATENCY: Duration = Duration::from_millis(150);
    /// Balance latency of the demo server.
    pub const BALANCE_LATENCY: Duration = Duration::from_millis(350);
    /// Debts latency of the demo server.
    pub const DEBTS_LATENCY: Duration = Duration::from_millis(350);

    /// Fixtures served with the demo server latencies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: [
                Self::IDENTITY_LATENCY,
                Self::BALANCE_LATENCY,
                Self::DEBTS_LATENCY,
            ],
            balance_rng: None,
        }
    }

    /// Fixtures served without any latency.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            latency: [Duration::ZERO; 3],
            balance_rng: None,
        }
    }

    /// Override the latency for one kind.
    #[must_use]
    pub const fn with_latency(mut self, kind: ResourceKind, latency: Duration) -> Self {
        self.latency[Self::slot(kind)] = latency;
        self
    }

    /// Serve `"<0-99>,<0-99>"` balances drawn from a seeded generator instead
    /// of [`FIXED_AMOUNT`].
    #[must_use]
    pub fn with_random_balance(mut self, seed: u64) -> Self {
        self.balance_rng = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Configured latency for `kind`.
    #[must_use]
    pub const fn latency(&self, kind: ResourceKind) -> Duration {
        self.latency[Self::slot(kind)]
    }

    const fn slot(kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Identity => 0,
            ResourceKind::Balance => 1,
            ResourceKind::Debts => 2,
        }
    }

    fn balance_amount(&self, kind: ResourceKind) -> Result<String, TransportError> {
        let Some(rng) = &self.balance_rng else {
            return Ok(FIXED_AMOUNT.to_string());
        };
        let mut rng = rng
            .lock()
            .map_err(|_| TransportError::request(kind, "balance generator poisoned"))?;
        let whole: u8 = rng.random_range(0..100);
        let frac: u8 = rng.random_range(0..100);
        Ok(format!("{whole},{frac}"))
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    fn name(&self) -> &'static str {
        "userstat-mock"
    }

    async fn fetch(
        &self,
        kind: ResourceKind,
        user_id: &UserId,
    ) -> Result<Vec<u8>, TransportError> {
        let latency = self.latency(kind);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        match kind {
            ResourceKind::Identity => Ok(fixtures::identity::by_user(user_id)),
            ResourceKind::Balance => {
                let amount = self.balance_amount(kind)?;
                Ok(fixtures::balance::by_user(user_id, &amount))
            }
            ResourceKind::Debts => Ok(fixtures::debts::all()),
        }
    }
}
