//! Sign in with email and password.
//!
//! Missing account and wrong password produce the same message so the
//! command doesn't reveal which emails are registered.

use zeroize::Zeroize;

use shiftpad_core::auth::verify_password;
use shiftpad_core::session::{SessionIdentity, SessionProvider};
use shiftpad_core::store::UserStore;

use crate::app::AppContext;
use crate::cli::LoginArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_line, prompt_password};

pub fn handle_login(ctx: &AppContext, args: &LoginArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let email = match &args.email {
        Some(value) => value.clone(),
        None => prompt_line("Email", args.no_input)?,
    };
    let mut password = prompt_password(args.no_input)?;

    let user = store.find_user_by_email(&email)?;
    let verified = match &user {
        Some(user) => verify_password(&user.password_hash, &password)?,
        None => false,
    };
    password.zeroize();

    let Some(user) = user.filter(|_| verified) else {
        return Err(CliError::auth_failed("Invalid email or password").into());
    };

    store.touch_last_login(&user.id)?;
    ctx.session()?
        .sign_in(&SessionIdentity::new(user.id, &user.email))?;

    if !ctx.quiet() {
        println!("Signed in as {} ({})", user.email, user.role.as_str());
    }

    Ok(())
}
