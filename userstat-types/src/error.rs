use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::{ResourceKind, ResourceKinds};
use crate::status::UserStatus;

/// Failure of a single upstream call.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportError {
    /// The request could not be sent or the response body could not be read.
    #[error("{kind} request failed: {message}")]
    Request {
        /// Resource kind that was being fetched.
        kind: ResourceKind,
        /// Human-readable transport message.
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("{kind} upstream returned status {status}")]
    Status {
        /// Resource kind that was being fetched.
        kind: ResourceKind,
        /// HTTP status code.
        status: u16,
    },

    /// The call did not finish before its timeout or the request deadline.
    #[error("{kind} upstream timed out")]
    TimedOut {
        /// Resource kind that was being fetched.
        kind: ResourceKind,
    },
}

impl TransportError {
    /// Helper: build a `Request` error.
    pub fn request(kind: ResourceKind, message: impl Into<String>) -> Self {
        Self::Request {
            kind,
            message: message.into(),
        }
    }

    /// Helper: build a `Status` error.
    #[must_use]
    pub const fn status(kind: ResourceKind, status: u16) -> Self {
        Self::Status { kind, status }
    }

    /// Helper: build a `TimedOut` error.
    #[must_use]
    pub const fn timed_out(kind: ResourceKind) -> Self {
        Self::TimedOut { kind }
    }

    /// Resource kind the failed call was fetching.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Request { kind, .. } | Self::Status { kind, .. } | Self::TimedOut { kind } => {
                *kind
            }
        }
    }
}

/// A payload that could not be decoded into its partial record.
///
/// Carries only the payload length so response bodies never reach logs.
#[derive(Debug, Error, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[error("malformed {kind} payload ({len} bytes)")]
pub struct DecodeError {
    /// Resource kind whose payload was malformed.
    pub kind: ResourceKind,
    /// Length of the rejected payload in bytes.
    pub len: usize,
}

impl DecodeError {
    /// Build a decode error for `kind` from the rejected payload.
    #[must_use]
    pub const fn new(kind: ResourceKind, payload: &[u8]) -> Self {
        Self {
            kind,
            len: payload.len(),
        }
    }
}

/// Per-fetch failure: either the transport or the decoder rejected it.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Payload decoding failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// Resource kind this failure belongs to.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Transport(e) => e.kind(),
            Self::Decode(e) => e.kind,
        }
    }
}

/// The user id did not have the expected shape; nothing was fetched.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[error("invalid user id {input:?}: {reason}")]
pub struct ValidationError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Build a validation error for `input`.
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// One or more upstream fetches failed.
///
/// Carries the best-effort partial status so callers can decide whether the
/// degraded data is acceptable.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[error("user status incomplete, failed: {failed}")]
pub struct AggregationError {
    /// Kinds whose fetch or decode failed.
    pub failed: ResourceKinds,
    /// Individual failures, in dispatch order.
    pub causes: Vec<FetchError>,
    /// Status assembled from the kinds that succeeded.
    pub partial: UserStatus,
}

impl AggregationError {
    /// Build from the collected failures; the failed set is derived from them.
    #[must_use]
    pub fn new(causes: Vec<FetchError>, partial: UserStatus) -> Self {
        Self {
            failed: causes.iter().map(FetchError::kind).collect(),
            causes,
            partial,
        }
    }

    /// Kinds whose fetch or decode failed.
    #[must_use]
    pub const fn failed_kinds(&self) -> ResourceKinds {
        self.failed
    }

    /// The best-effort partial status.
    #[must_use]
    pub const fn partial(&self) -> &UserStatus {
        &self.partial
    }

    /// Consume the error, keeping the partial status.
    #[must_use]
    pub fn into_partial(self) -> UserStatus {
        self.partial
    }
}

/// The only error type returned to callers of the aggregator.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserStatusError {
    /// Malformed user id, rejected before dispatch.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// One or more resource kinds were unavailable.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// Invalid construction argument (missing upstream, bad address, etc.).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl UserStatusError {
    /// Kinds that failed, empty for non-aggregation errors.
    #[must_use]
    pub const fn failed_kinds(&self) -> ResourceKinds {
        match self {
            Self::Aggregation(e) => e.failed,
            Self::Validation(_) | Self::InvalidArg(_) => ResourceKinds::empty(),
        }
    }

    /// The partial status, if this is an aggregation error.
    #[must_use]
    pub const fn partial(&self) -> Option<&UserStatus> {
        match self {
            Self::Aggregation(e) => Some(&e.partial),
            Self::Validation(_) | Self::InvalidArg(_) => None,
        }
    }
}
