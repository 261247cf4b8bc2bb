//! Persistence layer: capability traits, domain types, and the SQLite
//! backend.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::{HistoryStore, UserStore};
pub use types::{
    HistoryFilter, HistoryRecord, NewHistoryRecord, NewUser, Role, StoreMetadata, User,
};
