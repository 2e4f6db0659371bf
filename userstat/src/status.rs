use std::time::Duration;

use tokio::time::Instant;

use userstat_core::{
    ResourceKind, UserId, UserStatus, UserStatusError, decode_balance, decode_debts,
    decode_identity,
};

use crate::core::Aggregator;
use crate::join::join_partials;
use crate::task::FetchTask;

// Stand-in for "no deadline" when the timeout overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

impl Aggregator {
    /// Fetch identity, balance and debts for `user_id` concurrently and join them.
    ///
    /// Behavior and trade-offs:
    /// - The id is validated first; an invalid id fails with `Validation`
    ///   before any upstream is contacted.
    /// - All three requests are dispatched at once and awaited together, so total
    ///   latency tracks the slowest request rather than the sum.
    /// - One overall deadline covers all three. Requests still pending when it
    ///   elapses are cancelled and reported as timed out.
    /// - If any request fails, the error names every failed kind and carries the
    ///   partially populated status.
    ///
    /// # Errors
    /// Returns `UserStatusError::Validation` for a malformed id and
    /// `UserStatusError::Aggregation` when one or more fetches failed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "userstat",
            skip(self),
            fields(upstream = self.upstream.name()),
        )
    )]
    pub async fn user_status(&self, user_id: &str) -> Result<UserStatus, UserStatusError> {
        let user_id = UserId::parse(user_id)?;
        self.user_status_for(&user_id).await
    }

    /// Same as [`Self::user_status`] for an id that is already validated.
    ///
    /// # Errors
    /// Returns `UserStatusError::Aggregation` when one or more fetches failed.
    pub async fn user_status_for(&self, user_id: &UserId) -> Result<UserStatus, UserStatusError> {
        let deadline = deadline_after(self.cfg.request_timeout);
        let task = |kind| FetchTask {
            kind,
            user_id,
            upstream: self.upstream.as_ref(),
            deadline,
        };

        let (identity, balance, debts) = tokio::join!(
            task(ResourceKind::Identity).run(decode_identity),
            task(ResourceKind::Balance).run(decode_balance),
            task(ResourceKind::Debts).run(decode_debts),
        );

        let out = join_partials(identity, balance, debts);
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "userstat", ok = out.is_ok(), "user status joined");
        out
    }
}
