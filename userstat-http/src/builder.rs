use std::time::Duration;

use url::Url;
use userstat_core::UserStatusError;

use crate::HttpUpstream;

/// Builder for [`HttpUpstream`].
pub struct HttpUpstreamBuilder {
    address: String,
    client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl HttpUpstreamBuilder {
    pub(crate) fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            client: None,
            timeout: None,
        }
    }

    /// Use a preconfigured `reqwest::Client` (connection pool, proxies, TLS).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Bound every single request. Expired requests fail as timed out.
    ///
    /// Independent of the aggregator's overall deadline; whichever elapses first wins.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the upstream.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the address is not an absolute `http`/`https` URL
    /// that can carry a path, or if the default HTTP client cannot be created.
    pub fn build(self) -> Result<HttpUpstream, UserStatusError> {
        let base = Url::parse(&self.address).map_err(|e| {
            UserStatusError::InvalidArg(format!("invalid server address {:?}: {e}", self.address))
        })?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(UserStatusError::InvalidArg(format!(
                "server address {:?} must be an http(s) base URL",
                self.address
            )));
        }
        let client = match self.client {
            Some(c) => c,
            None => reqwest::Client::builder().build().map_err(|e| {
                UserStatusError::InvalidArg(format!("failed to build http client: {e}"))
            })?,
        };
        Ok(HttpUpstream {
            client,
            base,
            timeout: self.timeout,
        })
    }
}
