use rust_decimal::Decimal;

use crate::DebtRecord;

/// Keep the debts matching `predicate`, in their original order.
pub fn filter_debts<P>(debts: &[DebtRecord], mut predicate: P) -> Vec<&DebtRecord>
where
    P: FnMut(&DebtRecord) -> bool,
{
    debts.iter().filter(|d| predicate(*d)).collect()
}

/// Split debts into `(matching, rest)`, preserving order within each side.
pub fn partition_debts<P>(
    debts: &[DebtRecord],
    mut predicate: P,
) -> (Vec<&DebtRecord>, Vec<&DebtRecord>)
where
    P: FnMut(&DebtRecord) -> bool,
{
    debts.iter().partition(|d| predicate(*d))
}

/// Debts whose amount is strictly below `min`.
///
/// Debts with a non-numeric amount are skipped.
#[must_use]
pub fn debts_below(debts: &[DebtRecord], min: Decimal) -> Vec<&DebtRecord> {
    filter_debts(debts, |d| d.amount_decimal().is_some_and(|a| a < min))
}

/// Sum of all debt amounts; `None` if any amount is non-numeric.
#[must_use]
pub fn total_debt(debts: &[DebtRecord]) -> Option<Decimal> {
    debts
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| d.amount_decimal().map(|a| acc + a))
}
