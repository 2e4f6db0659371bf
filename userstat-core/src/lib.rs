//! userstat-core
//!
//! Core types, traits, and utilities shared across the userstat ecosystem.
//!
//! - `types`: the status aggregate, partial records, ids and errors.
//! - `upstream`: the `Upstream` trait every transport implements.
//! - `decode`: total, per-kind decoders from raw payloads to partial records.
//! - `filter`: higher-order helpers over debt records.
//!
//! Async runtime
//! -------------
//! `Upstream::fetch` is an `async_trait` method and is runtime-agnostic; the
//! `userstat` orchestrator drives it on Tokio.
#![warn(missing_docs)]

/// Per-kind response decoders.
pub mod decode;
/// Filtering and summing helpers over debt records.
pub mod filter;
pub mod types;
/// The `Upstream` endpoint trait.
pub mod upstream;

pub use decode::{decode_balance, decode_debts, decode_identity};
pub use filter::{debts_below, filter_debts, partition_debts, total_debt};
pub use types::*;
pub use upstream::Upstream;
