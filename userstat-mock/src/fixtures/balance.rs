use userstat_core::UserId;

/// Amount served when no random balance is configured.
pub const FIXED_AMOUNT: &str = "42,17";

pub fn by_user(id: &UserId, amount: &str) -> Vec<u8> {
    serde_json::json!({ "user_id": id.as_str(), "amount": amount })
        .to_string()
        .into_bytes()
}
