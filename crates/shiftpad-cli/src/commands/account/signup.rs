//! Create an account.
//!
//! Signup always writes `role = user`; admin accounts are bootstrapped at
//! `init` time. The new account is not signed in automatically.

use zeroize::Zeroize;

use shiftpad_core::auth::{hash_password, validate_email, MIN_PASSWORD_LEN};
use shiftpad_core::store::{NewUser, UserStore};
use shiftpad_core::ShiftpadError;

use crate::app::AppContext;
use crate::cli::SignupArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_line, prompt_new_password};

pub fn handle_signup(ctx: &AppContext, args: &SignupArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let email = match &args.email {
        Some(value) => value.clone(),
        None => prompt_line("Email", args.no_input)?,
    };
    if !validate_email(&email) {
        return Err(CliError::invalid_input(format!("Invalid email address: {}", email)).into());
    }

    let name = match &args.name {
        Some(value) => value.clone(),
        None => prompt_line("Name", args.no_input)?,
    };
    if name.trim().is_empty() {
        return Err(CliError::invalid_input("Name cannot be empty").into());
    }

    let mut password = prompt_new_password(args.no_input)?;
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

    match store.create_user(&NewUser::new(&email, name.trim(), hash)) {
        Ok(_) => {}
        Err(ShiftpadError::Validation(message)) => {
            return Err(CliError::invalid_input(message).into());
        }
        Err(err) => return Err(err.into()),
    }

    if !ctx.quiet() {
        println!("Account created for {}", email);
        println!("Hint: Run `shiftpad login` to sign in.");
    }

    Ok(())
}
