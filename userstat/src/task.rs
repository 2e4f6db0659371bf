use tokio::time::Instant;

use userstat_core::{DecodeError, FetchError, ResourceKind, TransportError, Upstream, UserId};

/// One in-flight upstream request: created at dispatch, consumed by the join.
pub(crate) struct FetchTask<'a> {
    pub(crate) kind: ResourceKind,
    pub(crate) user_id: &'a UserId,
    pub(crate) upstream: &'a dyn Upstream,
    pub(crate) deadline: Instant,
}

impl FetchTask<'_> {
    /// Fetch and decode, bounded by the request deadline.
    ///
    /// Dropping the upstream future at the deadline cancels its I/O.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "userstat::task::run",
            skip(self, decode),
            fields(kind = %self.kind, upstream = self.upstream.name()),
        )
    )]
    pub(crate) async fn run<T>(
        self,
        decode: fn(&[u8]) -> Result<T, DecodeError>,
    ) -> Result<T, FetchError> {
        let fetch = self.upstream.fetch(self.kind, self.user_id);
        let payload = tokio::time::timeout_at(self.deadline, fetch)
            .await
            .unwrap_or_else(|_| Err(TransportError::timed_out(self.kind)))?;
        Ok(decode(&payload)?)
    }
}
