//! The user status aggregate and the partial records it is built from.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One outstanding debt as reported by the debts upstream.
///
/// Ids and amounts are opaque strings; use [`DebtRecord::amount_decimal`] for a
/// numeric view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebtRecord {
    /// Debt identifier.
    pub id: String,
    /// Free-text reason (e.g. "chargeback").
    pub reason: String,
    /// Amount as received.
    pub amount: String,
}

impl DebtRecord {
    /// Parse the amount as a fixed-point decimal, if it is numeric.
    #[must_use]
    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

/// Partial record produced by the identity upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    /// User id as echoed by the upstream.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Partial record produced by the balance upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    /// User id as echoed by the upstream (`user_id` on the wire), if present.
    pub user_id: Option<String>,
    /// Balance amount as received.
    pub amount: String,
}

/// Composite view of a user joined from identity, balance and debts.
///
/// Fully populated only when every upstream fetch succeeded; fields belonging
/// to a failed kind are left at their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStatus {
    /// User id (from identity).
    pub id: String,
    /// Display name (from identity).
    pub name: String,
    /// Balance amount (from balance).
    pub balance_amount: String,
    /// Debts in the order the upstream returned them.
    pub debts: Vec<DebtRecord>,
}

impl UserStatus {
    /// Assemble a status from whichever partials are available.
    #[must_use]
    pub fn from_parts(
        identity: Option<Identity>,
        balance: Option<Balance>,
        debts: Option<Vec<DebtRecord>>,
    ) -> Self {
        let (id, name) = identity.map(|i| (i.id, i.name)).unwrap_or_default();
        Self {
            id,
            name,
            balance_amount: balance.map(|b| b.amount).unwrap_or_default(),
            debts: debts.unwrap_or_default(),
        }
    }

    /// Parse the balance as a fixed-point decimal, if it is numeric.
    #[must_use]
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.balance_amount)
    }

    /// True when every field is at its zero value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.name.is_empty()
            && self.balance_amount.is_empty()
            && self.debts.is_empty()
    }
}

/// Parse an opaque amount string into a decimal.
///
/// Accepts `.` or a single `,` as the decimal separator, since some upstreams
/// format balances as `"42,17"`. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains('.') && s.contains(',') {
        return None;
    }
    match s.matches(',').count() {
        0 => Decimal::from_str(s).ok(),
        1 => Decimal::from_str(&s.replace(',', ".")).ok(),
        _ => None,
    }
}
