//! Persistence capability traits.
//!
//! The original system talked to a hosted document database; these traits
//! are the injected seams that replace it. `HistoryStore` covers the
//! transform-history collection, `UserStore` the account directory. The
//! cipher core depends on neither.

use uuid::Uuid;

use super::types::{HistoryFilter, HistoryRecord, NewHistoryRecord, NewUser, User};
use crate::error::Result;

/// Append-and-query interface for transform history.
///
/// Implementations must return records newest-first and must not reorder
/// records with identical timestamps across calls.
pub trait HistoryStore: Send + Sync {
    /// Persist a new record.
    ///
    /// # Returns
    ///
    /// Returns the UUID of the created record.
    fn append_record(&self, record: &NewHistoryRecord) -> Result<Uuid>;

    /// Get a record by ID.
    ///
    /// Returns `Ok(Some(record))` if found, `Ok(None)` if not found.
    fn get_record(&self, id: &Uuid) -> Result<Option<HistoryRecord>>;

    /// List records matching the filter, newest first.
    fn list_records(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>>;

    /// Count records matching the filter (`limit` is ignored).
    fn count_records(&self, filter: &HistoryFilter) -> Result<u64>;
}

/// Account directory interface.
pub trait UserStore: Send + Sync {
    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Returns `ShiftpadError::Validation` if the email is already
    /// registered.
    fn create_user(&self, user: &NewUser) -> Result<Uuid>;

    /// Get an account by ID.
    fn get_user(&self, id: &Uuid) -> Result<Option<User>>;

    /// Look up an account by its sign-in email.
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// List all accounts, newest first.
    fn list_users(&self) -> Result<Vec<User>>;

    /// Delete an account.
    ///
    /// History records owned by the account are retained but detached.
    /// Returns `true` if an account was removed.
    fn delete_user(&self, id: &Uuid) -> Result<bool>;

    /// Record a successful sign-in.
    fn touch_last_login(&self, id: &Uuid) -> Result<()>;
}
