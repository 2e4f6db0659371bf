use userstat_core::{
    AggregationError, Balance, DebtRecord, FetchError, Identity, UserStatus, UserStatusError,
};

fn keep<T>(causes: &mut Vec<FetchError>, res: Result<T, FetchError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(kind = %e.kind(), error = %e, "upstream fetch failed");
            causes.push(e);
            None
        }
    }
}

/// Merge three partial results into a user status.
///
/// Behavior:
/// - All three succeed: the fully populated status.
/// - Any failure: an `Aggregation` error naming every failed kind, carrying the
///   individual causes and a best-effort status in which the failed kinds are
///   left at their zero value. No failure is dropped.
///
/// # Errors
/// Returns `UserStatusError::Aggregation` when at least one partial failed.
pub fn join_partials(
    identity: Result<Identity, FetchError>,
    balance: Result<Balance, FetchError>,
    debts: Result<Vec<DebtRecord>, FetchError>,
) -> Result<UserStatus, UserStatusError> {
    let mut causes: Vec<FetchError> = Vec::new();
    let identity = keep(&mut causes, identity);
    let balance = keep(&mut causes, balance);
    let debts = keep(&mut causes, debts);

    let status = UserStatus::from_parts(identity, balance, debts);
    if causes.is_empty() {
        Ok(status)
    } else {
        Err(AggregationError::new(causes, status).into())
    }
}
