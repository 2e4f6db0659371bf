//! userstat-http
//!
//! `Upstream` implementation over plain HTTP GET endpoints:
//! `/users/{id}`, `/balance/{id}` and `/user-debts/{id}` under a base address.
//! Also exposes [`get_user_status`], a one-call entry point that wires an
//! [`HttpUpstream`] into a default `userstat::Aggregator`.
#![warn(missing_docs)]

mod builder;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;
use userstat::Aggregator;
use userstat_core::{ResourceKind, TransportError, Upstream, UserId, UserStatus, UserStatusError};

pub use builder::HttpUpstreamBuilder;

/// Upstream that fetches each resource kind with one GET request.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base: Url,
    timeout: Option<Duration>,
}

impl HttpUpstream {
    /// Name reported through `Upstream::name`.
    pub const NAME: &'static str = "userstat-http";

    /// Build with a default client from a base address such as `http://localhost:8080`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the address is not a usable http(s) base URL.
    pub fn new(server_address: &str) -> Result<Self, UserStatusError> {
        Self::builder(server_address).build()
    }

    /// Start a builder for `server_address`.
    #[must_use]
    pub fn builder(server_address: impl Into<String>) -> HttpUpstreamBuilder {
        HttpUpstreamBuilder::new(server_address)
    }

    /// The parsed base address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for one resource of one user.
    ///
    /// Segments are appended to any path prefix of the base address.
    ///
    /// # Errors
    /// Returns a `Request` error if the base address cannot carry a path.
    pub fn endpoint(&self, kind: ResourceKind, user_id: &UserId) -> Result<Url, TransportError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::request(kind, "base address cannot carry a path"))?
            .pop_if_empty()
            .push(kind.path_segment())
            .push(user_id.as_str());
        Ok(url)
    }
}

fn map_reqwest(kind: ResourceKind, e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::timed_out(kind)
    } else {
        TransportError::request(kind, e.to_string())
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "userstat_http::fetch",
            skip(self, user_id),
            fields(kind = %kind),
        )
    )]
    async fn fetch(
        &self,
        kind: ResourceKind,
        user_id: &UserId,
    ) -> Result<Vec<u8>, TransportError> {
        let url = self.endpoint(kind, user_id)?;
        let mut req = self.client.get(url);
        if let Some(t) = self.timeout {
            req = req.timeout(t);
        }

        let resp = req.send().await.map_err(|e| map_reqwest(kind, &e))?;
        let status = resp.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(status = status.as_u16(), "non-success status");
            return Err(TransportError::status(kind, status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| map_reqwest(kind, &e))?;
        Ok(body.to_vec())
    }
}

/// Fetch the status of `user_id` from the three endpoints under `server_address`.
///
/// Uses a default client and the default request deadline. Build an
/// `Aggregator` with an [`HttpUpstream`] directly to customize either.
///
/// # Errors
/// - `InvalidArg` if `server_address` is not a usable base URL.
/// - `Validation` if `user_id` is malformed; no request is made.
/// - `Aggregation` if any of the three fetches failed.
pub async fn get_user_status(
    server_address: &str,
    user_id: &str,
) -> Result<UserStatus, UserStatusError> {
    let upstream = HttpUpstream::new(server_address)?;
    let agg = Aggregator::builder()
        .with_upstream(Arc::new(upstream))
        .build()?;
    agg.user_status(user_id).await
}
