/// The same three chargebacks are served for every user.
pub const DEBTS: [(&str, &str, &str); 3] = [
    ("14", "chargeback", "71.0"),
    ("37", "chargeback", "15.5"),
    ("51", "chargeback", "43.0"),
];

pub fn all() -> Vec<u8> {
    let rows: Vec<_> = DEBTS
        .iter()
        .map(|(id, reason, amount)| {
            serde_json::json!({ "id": id, "reason": reason, "amount": amount })
        })
        .collect();
    serde_json::Value::Array(rows).to_string().into_bytes()
}
