//! Core data types for the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cipher::Direction;

/// Metadata for a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Format version (e.g., "0.1")
    pub format_version: String,

    /// When this store was created
    pub created_at: DateTime<Utc>,
}

/// Account role. Admin visibility is derived from this field, never
/// stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// A registered account.
///
/// Serializes for display surfaces only; the password hash never leaves
/// the store layer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Sign-in email (unique)
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Stored password hash (never serialized)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When this account was created
    pub created_at: DateTime<Utc>,

    /// Last successful sign-in, if any
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Builder for creating new accounts.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role: Role::User,
            password_hash: password_hash.into(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// A persisted transform record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Owning account; `None` once the account has been removed
    pub user_id: Option<Uuid>,

    /// Text as supplied by the caller
    pub input_text: String,

    /// Transformed text
    pub output_text: String,

    /// Shift key as supplied by the caller
    pub shift_key: i64,

    /// Which way the transform ran
    pub action: Direction,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

/// Builder for creating new history records.
#[derive(Debug, Clone)]
pub struct NewHistoryRecord {
    pub user_id: Option<Uuid>,
    pub input_text: String,
    pub output_text: String,
    pub shift_key: i64,
    pub action: Direction,

    /// Optional creation timestamp override; defaults to now
    pub created_at: Option<DateTime<Utc>>,
}

impl NewHistoryRecord {
    pub fn new(
        input_text: impl Into<String>,
        output_text: impl Into<String>,
        shift_key: i64,
        action: Direction,
    ) -> Self {
        Self {
            user_id: None,
            input_text: input_text.into(),
            output_text: output_text.into(),
            shift_key,
            action,
            created_at: None,
        }
    }

    pub fn with_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Filter for querying history records.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Filter by owning account
    pub user_id: Option<Uuid>,

    /// Filter by transform direction
    pub action: Option<Direction>,

    /// Start date (inclusive)
    pub since: Option<DateTime<Utc>>,

    /// End date (inclusive)
    pub until: Option<DateTime<Utc>>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn action(mut self, action: Direction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn since(mut self, date: DateTime<Utc>) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: DateTime<Utc>) -> Self {
        self.until = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
