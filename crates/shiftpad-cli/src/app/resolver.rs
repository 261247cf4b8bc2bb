//! Path resolution for config, store, and session files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{
    default_config_path, default_session_path, default_store_path, ShiftpadConfig,
};

/// Resolve the config file path, checking SHIFTPAD_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHIFTPAD_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store file path from CLI args, config, or the default.
pub fn resolve_store_path(cli: &Cli, config: Option<&ShiftpadConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

/// Resolve the session file path from config or the default.
pub fn resolve_session_path(config: Option<&ShiftpadConfig>) -> anyhow::Result<PathBuf> {
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.session.path));
    }
    default_session_path()
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "No store found at {}\n\nRun:\n  shiftpad init\n\nOr specify a store path:\n  SHIFTPAD_STORE=/path/to/shiftpad.db shiftpad init",
        path.display()
    )
}
