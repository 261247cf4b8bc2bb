//! Application context for the Shiftpad CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file so handlers
//! don't thread paths and settings through every call.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use shiftpad_core::session::{FileSession, SessionProvider};
use shiftpad_core::store::{SqliteStore, User, UserStore};
use shiftpad_core::ShiftpadError;

use crate::cli::Cli;
use crate::config::ShiftpadConfig;
use crate::constants::DEFAULT_SHIFT;
use crate::errors::CliError;

use super::resolver::{
    missing_store_message, resolve_config_path, resolve_session_path, resolve_store_path,
};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<ShiftpadConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it lazily. A missing config file is not an
    /// error; every setting has a default.
    pub fn config(&self) -> anyhow::Result<Option<&ShiftpadConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                Ok::<_, anyhow::Error>(Some(crate::config::read_config(&path)?))
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Resolve the store file path.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open the store, mapping a missing file to a typed not-found error.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.store_path()?;
        match SqliteStore::open(&path) {
            Ok(store) => Ok(store),
            Err(ShiftpadError::StoreNotFound) => Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Run `shiftpad init` first.",
            )
            .into()),
            Err(err) => Err(err.into()),
        }
    }

    /// The session provider for this invocation.
    pub fn session(&self) -> anyhow::Result<FileSession> {
        Ok(FileSession::new(resolve_session_path(self.config()?)?))
    }

    /// Resolve the signed-in account, if any.
    ///
    /// A session that references an account no longer in the store is an
    /// error with a logout hint, not a silent anonymous.
    pub fn current_user(&self, store: &SqliteStore) -> anyhow::Result<Option<User>> {
        let session = self.session()?;
        let Some(identity) = session.current()? else {
            return Ok(None);
        };
        match store.get_user(&identity.user_id)? {
            Some(user) => Ok(Some(user)),
            None => Err(CliError::auth_failed_with_hint(
                format!("Session references an unknown account ({})", identity.email),
                "Hint: Run `shiftpad logout` to clear it.",
            )
            .into()),
        }
    }

    /// Require a signed-in account.
    pub fn require_user(&self, store: &SqliteStore) -> anyhow::Result<User> {
        self.current_user(store)?.ok_or_else(|| {
            CliError::auth_failed_with_hint(
                "Not signed in",
                "Hint: Run `shiftpad login` (or `shiftpad signup` to create an account).",
            )
            .into()
        })
    }

    /// Require a signed-in admin account.
    pub fn require_admin(&self, store: &SqliteStore) -> anyhow::Result<User> {
        let user = self.require_user(store)?;
        if !user.is_admin() {
            return Err(CliError::auth_failed(format!(
                "This command requires an admin account; {} has role \"{}\"",
                user.email,
                user.role.as_str()
            ))
            .into());
        }
        Ok(user)
    }

    /// Resolve the shift key: flag, then config default, then 3.
    ///
    /// The flag is range-checked by clap; a config value gets the same
    /// 1-25 presentation-layer bound here.
    pub fn resolve_shift(&self, flag: Option<i64>) -> anyhow::Result<i64> {
        if let Some(value) = flag {
            return Ok(value);
        }
        if let Some(config) = self.config()? {
            if let Some(value) = config.ui.default_shift {
                if !(1..=25).contains(&value) {
                    return Err(CliError::invalid_input(format!(
                        "default_shift must be in 1-25, got {}",
                        value
                    ))
                    .into());
                }
                return Ok(value);
            }
        }
        Ok(DEFAULT_SHIFT)
    }
}
