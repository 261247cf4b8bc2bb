//! Init command handler: create the store, write the default config, and
//! optionally bootstrap an admin account.
//!
//! Admin role assignment happened out-of-band in the original system;
//! `--admin-email` is the CLI equivalent of that step. `signup` never
//! creates admins.

use std::path::PathBuf;

use zeroize::Zeroize;

use shiftpad_core::auth::{hash_password, validate_email, MIN_PASSWORD_LEN};
use shiftpad_core::store::{NewUser, Role, SqliteStore, UserStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_session_path, default_store_path, write_config, ShiftpadConfig};
use crate::errors::CliError;
use crate::helpers::prompt_new_password;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let store_path: PathBuf = match args.path.clone().or_else(|| ctx.cli().store.clone()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    let session_path = default_session_path()?;

    SqliteStore::create(&store_path).map_err(|e| {
        anyhow::anyhow!("Failed to create store at {}: {}", store_path.display(), e)
    })?;

    let config_path = resolve_config_path()?;
    let config = ShiftpadConfig::new(store_path.clone(), session_path, None);
    write_config(&config_path, &config)?;

    let admin_email = if let Some(email) = &args.admin_email {
        let store = SqliteStore::open(&store_path)?;
        Some(create_admin(&store, email, args.admin_name.as_deref(), args.no_input)?)
    } else {
        None
    };

    if !ctx.quiet() {
        println!("Initialized new store at {}", store_path.display());
        println!("Wrote config to {}", config_path.display());
        if let Some(email) = admin_email {
            println!("Created admin account {}", email);
        }
        println!();
        println!("Quickstart:");
        println!("  shiftpad encrypt \"HELLO\" -s 3");
        println!("  shiftpad signup");
        println!("  shiftpad login");
        println!("  shiftpad history list");
    }

    Ok(())
}

fn create_admin(
    store: &SqliteStore,
    email: &str,
    name: Option<&str>,
    no_input: bool,
) -> anyhow::Result<String> {
    if !validate_email(email) {
        return Err(CliError::invalid_input(format!("Invalid email address: {}", email)).into());
    }
    let name = name
        .map(|value| value.to_string())
        .or_else(|| email.split('@').next().map(|local| local.to_string()))
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| CliError::invalid_input("Admin name cannot be empty"))?;

    let mut password = prompt_new_password(no_input)?;
    if password.len() < MIN_PASSWORD_LEN {
        password.zeroize();
        return Err(CliError::invalid_input(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
        .into());
    }
    let hash = hash_password(&password)?;
    password.zeroize();

    store.create_user(&NewUser::new(email, name, hash).with_role(Role::Admin))?;
    Ok(email.to_string())
}
