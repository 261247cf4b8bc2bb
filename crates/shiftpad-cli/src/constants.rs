//! Constants used throughout the CLI.

/// Shift key applied when neither the flag nor the config provides one.
pub const DEFAULT_SHIFT: i64 = 3;

/// Records shown by `history list` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells; clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, record, account).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (not signed in, wrong credentials, no admin).
    pub const AUTH_FAILED: i32 = 5;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}
