use userstat_core::UserId;

pub fn by_user(id: &UserId) -> Vec<u8> {
    serde_json::json!({ "id": id.as_str(), "name": format!("user{id}") })
        .to_string()
        .into_bytes()
}
