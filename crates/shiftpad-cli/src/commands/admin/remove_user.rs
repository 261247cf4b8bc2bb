//! Remove an account (admin view). History records survive, detached.

use dialoguer::Confirm;

use shiftpad_core::store::UserStore;

use crate::app::AppContext;
use crate::cli::RemoveUserArgs;
use crate::errors::CliError;

pub fn handle_remove_user(ctx: &AppContext, args: &RemoveUserArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let admin = ctx.require_admin(&store)?;

    let Some(target) = store.find_user_by_email(&args.email)? else {
        return Err(CliError::not_found(
            format!("No account with email {}", args.email),
            "Hint: Run `shiftpad admin users` to list accounts.",
        )
        .into());
    };

    if target.id == admin.id {
        return Err(
            CliError::invalid_input("Refusing to remove the signed-in admin account").into(),
        );
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove account {}? Their history is kept but detached.",
                target.email
            ))
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
        if !confirmed {
            if !ctx.quiet() {
                println!("Aborted.");
            }
            return Ok(());
        }
    }

    store.delete_user(&target.id)?;

    if !ctx.quiet() {
        println!("Removed account {}", target.email);
    }

    Ok(())
}
