//! Userstat builds one user status out of three independent upstream resources.
//!
//! Overview
//! - Fetches identity, balance and debts for a user through one `Upstream`.
//! - Dispatches all three requests at once and joins them at a single merge point.
//! - Normalizes failures into `UserStatusError` and exposes the domain types from
//!   `userstat_core`.
//!
//! Key behaviors and trade-offs
//! - Latency: total wall time follows the slowest of the three requests, not
//!   their sum.
//! - Deadline: a single request timeout bounds the whole call. Pending requests
//!   are cancelled when it elapses and reported as timed out.
//! - Failures: no failure is dropped. The error lists every failed kind and carries
//!   a partial status with the failed parts left at their zero value.
//! - Validation: malformed ids are rejected before any request is made.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use userstat::Aggregator;
//!
//! let agg = Aggregator::builder()
//!     .with_upstream(Arc::new(userstat_mock::MockUpstream::new()))
//!     .build()?;
//!
//! match agg.user_status("2").await {
//!     Ok(status) => println!("{} owes {} debts", status.name, status.debts.len()),
//!     Err(e) => {
//!         eprintln!("failed kinds: {}", e.failed_kinds());
//!         if let Some(partial) = e.partial() {
//!             println!("partial: {partial:?}");
//!         }
//!     }
//! }
//! ```
//!
//! See `userstat-http/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod join;
mod status;
mod task;

pub use core::{Aggregator, AggregatorBuilder};
pub use join::join_partials;

// Re-export core types for convenience
pub use userstat_core::{
    AggregationError, AggregatorConfig, Balance, DebtRecord, DecodeError, Decimal, FetchError,
    Identity, ResourceKind, ResourceKinds, TransportError, Upstream, UserId, UserStatus,
    UserStatusError, ValidationError, debts_below, filter_debts, partition_debts, total_debt,
};
