//! Decoders from raw upstream payloads to partial records.
//!
//! Each decoder is total: any input, including invalid UTF-8 or a payload of
//! the wrong JSON shape, yields either a record or a [`DecodeError`]. Decoders
//! are independent, so a malformed payload for one kind never affects another.
//!
//! Ids and amounts are carried as opaque strings. Upstreams that emit them as
//! JSON numbers are accepted; the number keeps its JSON textual form.

use serde::{Deserialize, Deserializer};

use crate::{Balance, DebtRecord, DecodeError, Identity, ResourceKind};

#[derive(Deserialize)]
#[serde(untagged)]
enum Opaque {
    Text(String),
    Number(serde_json::Number),
}

impl From<Opaque> for String {
    fn from(v: Opaque) -> Self {
        match v {
            Opaque::Text(s) => s,
            Opaque::Number(n) => n.to_string(),
        }
    }
}

fn opaque<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Opaque::deserialize(d).map(String::from)
}

fn opaque_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Option::<Opaque>::deserialize(d).map(|v| v.map(String::from))
}

#[derive(Deserialize)]
struct IdentityWire {
    #[serde(deserialize_with = "opaque")]
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct BalanceWire {
    #[serde(default, deserialize_with = "opaque_opt")]
    user_id: Option<String>,
    #[serde(deserialize_with = "opaque")]
    amount: String,
}

#[derive(Deserialize)]
struct DebtWire {
    #[serde(deserialize_with = "opaque")]
    id: String,
    reason: String,
    #[serde(deserialize_with = "opaque")]
    amount: String,
}

fn parse<'a, T: Deserialize<'a>>(kind: ResourceKind, payload: &'a [u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(payload).map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %kind, len = payload.len(), error = %_e, "payload rejected");
        DecodeError::new(kind, payload)
    })
}

/// Decode an identity payload: `{ "id", "name" }`.
///
/// # Errors
/// Returns a [`DecodeError`] for `identity` if the payload is not a JSON object
/// with both fields.
pub fn decode_identity(payload: &[u8]) -> Result<Identity, DecodeError> {
    let w: IdentityWire = parse(ResourceKind::Identity, payload)?;
    Ok(Identity {
        id: w.id,
        name: w.name,
    })
}

/// Decode a balance payload: `{ "user_id", "amount" }`.
///
/// `user_id` is optional; `amount` is required.
///
/// # Errors
/// Returns a [`DecodeError`] for `balance` if `amount` is missing or the
/// payload is not a JSON object.
pub fn decode_balance(payload: &[u8]) -> Result<Balance, DecodeError> {
    let w: BalanceWire = parse(ResourceKind::Balance, payload)?;
    Ok(Balance {
        user_id: w.user_id,
        amount: w.amount,
    })
}

/// Decode a debts payload: a JSON array of `{ "id", "reason", "amount" }`.
///
/// Order is preserved as received.
///
/// # Errors
/// Returns a [`DecodeError`] for `debts` if the payload is not an array or any
/// element lacks a field.
pub fn decode_debts(payload: &[u8]) -> Result<Vec<DebtRecord>, DecodeError> {
    let w: Vec<DebtWire> = parse(ResourceKind::Debts, payload)?;
    Ok(w.into_iter()
        .map(|d| DebtRecord {
            id: d.id,
            reason: d.reason,
            amount: d.amount,
        })
        .collect())
}
