//! Application-level utilities for the Shiftpad CLI.
//!
//! This module provides:
//! - Path resolution for config, store, and session files
//! - The per-invocation application context with lazily-loaded config

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{missing_store_message, resolve_config_path};
