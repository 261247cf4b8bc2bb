//! Raw row types for database queries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cipher::Direction;
use crate::error::{Result, ShiftpadError};
use crate::store::types::{HistoryRecord, Role, User};

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| ShiftpadError::Storage(format!("Invalid timestamp: {}", e)))
}

/// Raw row data from the history table, before parsing into domain types.
#[derive(Debug)]
pub struct HistoryRow {
    pub id: String,
    pub user_id: Option<String>,
    pub input_text: String,
    pub output_text: String,
    pub shift_key: i64,
    pub action: String,
    pub created_at: String,
}

impl TryFrom<HistoryRow> for HistoryRecord {
    type Error = ShiftpadError;

    fn try_from(row: HistoryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| ShiftpadError::Storage(format!("Invalid record UUID: {}", e)))?;
        let user_id = row
            .user_id
            .as_ref()
            .map(|value| {
                Uuid::parse_str(value)
                    .map_err(|e| ShiftpadError::Storage(format!("Invalid user UUID: {}", e)))
            })
            .transpose()?;
        let action: Direction = row
            .action
            .parse()
            .map_err(|e: String| ShiftpadError::Storage(e))?;
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(HistoryRecord {
            id,
            user_id,
            input_text: row.input_text,
            output_text: row.output_text,
            shift_key: row.shift_key,
            action,
            created_at,
        })
    }
}

/// Raw row data from the users table.
#[derive(Debug)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: String,
    pub last_login: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = ShiftpadError;

    fn try_from(row: UserRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| ShiftpadError::Storage(format!("Invalid user UUID: {}", e)))?;
        let role: Role = row
            .role
            .parse()
            .map_err(|e: String| ShiftpadError::Storage(e))?;
        let created_at = parse_timestamp(&row.created_at)?;
        let last_login = row
            .last_login
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(User {
            id,
            email: row.email,
            name: row.name,
            role,
            password_hash: row.password_hash,
            created_at,
            last_login,
        })
    }
}
