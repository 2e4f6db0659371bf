//! Re-export of foundational types from `userstat-types`.
// Consolidated re-exports so downstream crates can depend on `userstat-core` only

pub use userstat_types::{AggregatorConfig, ResourceKind, ResourceKinds, UserId};
pub use userstat_types::{Balance, DebtRecord, Identity, UserStatus, parse_amount};
pub use userstat_types::{
    AggregationError, DecodeError, FetchError, TransportError, UserStatusError, ValidationError,
};

pub use rust_decimal::Decimal;
