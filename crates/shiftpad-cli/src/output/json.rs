//! JSON output formatting.
//!
//! Values are built explicitly so the wire shape is a deliberate surface;
//! in particular, nothing here can ever emit a password hash.

use shiftpad_core::store::{HistoryRecord, User};

/// Convert a history record to JSON for output.
pub fn record_json(record: &HistoryRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "user_id": record.user_id,
        "input_text": record.input_text,
        "output_text": record.output_text,
        "shift_key": record.shift_key,
        "action": record.action.as_str(),
        "created_at": record.created_at,
    })
}

/// Convert multiple records to a JSON array for output.
pub fn records_json(records: &[HistoryRecord]) -> Vec<serde_json::Value> {
    records.iter().map(record_json).collect()
}

/// Convert an account to JSON for output.
pub fn user_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "email": user.email,
        "name": user.name,
        "role": user.role.as_str(),
        "created_at": user.created_at,
        "last_login": user.last_login,
    })
}

/// Convert multiple accounts to a JSON array for output.
pub fn users_json(users: &[User]) -> Vec<serde_json::Value> {
    users.iter().map(user_json).collect()
}
