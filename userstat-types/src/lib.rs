//! Userstat-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod kind;
mod status;
mod user_id;

pub use config::AggregatorConfig;
pub use error::{
    AggregationError, DecodeError, FetchError, TransportError, UserStatusError, ValidationError,
};
pub use kind::{ResourceKind, ResourceKinds};
pub use status::{Balance, DebtRecord, Identity, UserStatus, parse_amount};
pub use user_id::UserId;
