//! SQLite-backed document store.
//!
//! A plain on-disk SQLite database via rusqlite. UUIDs and RFC 3339
//! timestamps are stored as TEXT. The connection lives behind a mutex so
//! the store is `Send + Sync`.

mod row;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{Result, ShiftpadError};
use crate::store::traits::{HistoryStore, UserStore};
use crate::store::types::{
    HistoryFilter, HistoryRecord, NewHistoryRecord, NewUser, StoreMetadata, User,
};

use row::{HistoryRow, UserRow};

/// Current on-disk format version.
const FORMAT_VERSION: &str = "0.1";

/// SQLite document store holding accounts and transform history.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Lock the database connection, returning an error if the mutex is
    /// poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ShiftpadError::Storage("SQLite connection poisoned".to_string()))
    }

    /// Create a new store at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `ShiftpadError::Storage` if the file already exists or the
    /// path cannot be written.
    pub fn create(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ShiftpadError::Storage(
                "Store file already exists".to_string(),
            ));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        // Initialize schema
        conn.execute_batch(
            r#"
            CREATE TABLE meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                role TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                last_login TEXT
            );

            CREATE TABLE history (
                id TEXT PRIMARY KEY,
                user_id TEXT,
                input_text TEXT NOT NULL,
                output_text TEXT NOT NULL,
                shift_key INTEGER NOT NULL,
                action TEXT NOT NULL,
                created_at TEXT NOT NULL,

                FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE SET NULL
            );

            CREATE INDEX history_user_created
            ON history (user_id, created_at);
            "#,
        )?;

        // Insert metadata
        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["format_version", FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &created_at],
        )?;

        Ok(())
    }

    /// Open an existing store.
    ///
    /// # Errors
    ///
    /// Returns `ShiftpadError::StoreNotFound` if the file does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShiftpadError::StoreNotFound);
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Get store metadata.
    pub fn metadata(&self) -> Result<StoreMetadata> {
        let conn = self.lock_conn()?;

        let format_version: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;

        let created_at_str: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'created_at'",
            [],
            |row| row.get(0),
        )?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| ShiftpadError::Storage(format!("Invalid created_at timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(StoreMetadata {
            format_version,
            created_at,
        })
    }

    /// Check store integrity.
    ///
    /// Verifies foreign key relationships, the expected tables, and the
    /// metadata keys.
    pub fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let violations: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pragma_foreign_key_check",
            [],
            |row| row.get(0),
        )?;
        if violations > 0 {
            return Err(ShiftpadError::Storage(format!(
                "{} foreign key violation(s)",
                violations
            )));
        }

        for table in ["meta", "users", "history"] {
            let found: Option<String> = conn
                .query_row(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                    [table],
                    |row| row.get(0),
                )
                .optional()?;
            if found.is_none() {
                return Err(ShiftpadError::Storage(format!(
                    "Missing table: {}",
                    table
                )));
            }
        }

        for key in ["format_version", "created_at"] {
            let found: Option<String> = conn
                .query_row("SELECT value FROM meta WHERE key = ?", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            if found.is_none() {
                return Err(ShiftpadError::Storage(format!(
                    "Missing metadata key: {}",
                    key
                )));
            }
        }

        Ok(())
    }

    fn filter_conditions(
        filter: &HistoryFilter,
    ) -> (Vec<String>, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(user_id) = filter.user_id {
            conditions.push("user_id = ?".to_string());
            params.push(Box::new(user_id.to_string()));
        }

        if let Some(action) = filter.action {
            conditions.push("action = ?".to_string());
            params.push(Box::new(action.as_str()));
        }

        if let Some(since) = filter.since {
            conditions.push("created_at >= ?".to_string());
            params.push(Box::new(since.to_rfc3339()));
        }

        if let Some(until) = filter.until {
            conditions.push("created_at <= ?".to_string());
            params.push(Box::new(until.to_rfc3339()));
        }

        (conditions, params)
    }
}

impl HistoryStore for SqliteStore {
    fn append_record(&self, record: &NewHistoryRecord) -> Result<Uuid> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        if let Some(user_id) = record.user_id {
            let exists: Option<String> = tx
                .query_row(
                    "SELECT id FROM users WHERE id = ?",
                    [user_id.to_string()],
                    |row| row.get(0),
                )
                .optional()?;
            if exists.is_none() {
                return Err(ShiftpadError::Validation(
                    "Record owner does not exist".to_string(),
                ));
            }
        }

        let id = Uuid::new_v4();
        let created_at = record.created_at.unwrap_or_else(Utc::now);

        tx.execute(
            r#"
            INSERT INTO history (
                id,
                user_id,
                input_text,
                output_text,
                shift_key,
                action,
                created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            (
                id.to_string(),
                record.user_id.map(|user_id| user_id.to_string()),
                &record.input_text,
                &record.output_text,
                record.shift_key,
                record.action.as_str(),
                created_at.to_rfc3339(),
            ),
        )?;

        tx.commit()?;

        Ok(id)
    }

    fn get_record(&self, id: &Uuid) -> Result<Option<HistoryRecord>> {
        let conn = self.lock_conn()?;

        let result = conn.query_row(
            r#"
            SELECT id, user_id, input_text, output_text, shift_key, action, created_at
            FROM history
            WHERE id = ?
            "#,
            [id.to_string()],
            |row| {
                Ok(HistoryRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    input_text: row.get(2)?,
                    output_text: row.get(3)?,
                    shift_key: row.get(4)?,
                    action: row.get(5)?,
                    created_at: row.get(6)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.try_into()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_records(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>> {
        let conn = self.lock_conn()?;

        let (conditions, mut params) = Self::filter_conditions(filter);

        let mut query = String::from(
            "SELECT id, user_id, input_text, output_text, shift_key, action, created_at FROM history",
        );
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC, id");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok(HistoryRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                input_text: row.get(2)?,
                output_text: row.get(3)?,
                shift_key: row.get(4)?,
                action: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }

        Ok(records)
    }

    fn count_records(&self, filter: &HistoryFilter) -> Result<u64> {
        let conn = self.lock_conn()?;

        let (conditions, params) = Self::filter_conditions(filter);

        let mut query = String::from("SELECT COUNT(*) FROM history");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let count: i64 = conn.query_row(
            &query,
            rusqlite::params_from_iter(params.iter()),
            |row| row.get(0),
        )?;

        Ok(count as u64)
    }
}

impl UserStore for SqliteStore {
    fn create_user(&self, user: &NewUser) -> Result<Uuid> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let taken: Option<String> = tx
            .query_row(
                "SELECT id FROM users WHERE email = ?",
                [&user.email],
                |row| row.get(0),
            )
            .optional()?;
        if taken.is_some() {
            return Err(ShiftpadError::Validation(
                "Email is already registered".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let created_at = Utc::now().to_rfc3339();

        tx.execute(
            r#"
            INSERT INTO users (id, email, name, role, password_hash, created_at, last_login)
            VALUES (?, ?, ?, ?, ?, ?, NULL)
            "#,
            (
                id.to_string(),
                &user.email,
                &user.name,
                user.role.as_str(),
                &user.password_hash,
                created_at,
            ),
        )?;

        tx.commit()?;

        Ok(id)
    }

    fn get_user(&self, id: &Uuid) -> Result<Option<User>> {
        let conn = self.lock_conn()?;

        let result = conn.query_row(
            r#"
            SELECT id, email, name, role, password_hash, created_at, last_login
            FROM users
            WHERE id = ?
            "#,
            [id.to_string()],
            |row| {
                Ok(UserRow {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                    role: row.get(3)?,
                    password_hash: row.get(4)?,
                    created_at: row.get(5)?,
                    last_login: row.get(6)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.try_into()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.lock_conn()?;

        let result = conn.query_row(
            r#"
            SELECT id, email, name, role, password_hash, created_at, last_login
            FROM users
            WHERE email = ?
            "#,
            [email],
            |row| {
                Ok(UserRow {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                    role: row.get(3)?,
                    password_hash: row.get(4)?,
                    created_at: row.get(5)?,
                    last_login: row.get(6)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.try_into()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, email, name, role, password_hash, created_at, last_login
            FROM users
            ORDER BY created_at DESC, id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                name: row.get(2)?,
                role: row.get(3)?,
                password_hash: row.get(4)?,
                created_at: row.get(5)?,
                last_login: row.get(6)?,
            })
        })?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?.try_into()?);
        }

        Ok(users)
    }

    fn delete_user(&self, id: &Uuid) -> Result<bool> {
        let conn = self.lock_conn()?;
        let deleted = conn.execute("DELETE FROM users WHERE id = ?", [id.to_string()])?;
        Ok(deleted > 0)
    }

    fn touch_last_login(&self, id: &Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "UPDATE users SET last_login = ? WHERE id = ?",
            (Utc::now().to_rfc3339(), id.to_string()),
        )?;
        Ok(())
    }
}
