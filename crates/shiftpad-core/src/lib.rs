//! # Shiftpad Core
//!
//! Core library for Shiftpad - a Caesar-cipher workbench with per-account
//! transform history.
//!
//! This crate provides the cipher transform, account credential helpers,
//! and the persistence/session capability seams independent of the CLI
//! interface.
//!
//! ## Architecture
//!
//! - **cipher**: The Caesar transform (pure, total)
//! - **auth**: Email validation and password hashing
//! - **store**: History/user store traits and the SQLite implementation
//! - **session**: Current-identity capability and its file-backed backend

pub mod auth;
pub mod cipher;
pub mod error;
pub mod session;
pub mod store;

pub use cipher::{transform, Direction};
pub use error::{Result, ShiftpadError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
