use async_trait::async_trait;

use crate::{ResourceKind, TransportError, UserId};

/// An upstream service able to serve every [`ResourceKind`] for a user.
///
/// Implementations perform exactly one attempt per call: no retries, no
/// caching. Any transport failure, non-success status, or timeout is returned
/// as a [`TransportError`] tagged with the requested kind; implementations
/// must not panic.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the raw payload for `kind` of the given user.
    async fn fetch(&self, kind: ResourceKind, user_id: &UserId)
    -> Result<Vec<u8>, TransportError>;
}
