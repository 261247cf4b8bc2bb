//! List registered accounts (admin view).

use shiftpad_core::store::UserStore;

use crate::app::AppContext;
use crate::cli::AdminViewArgs;
use crate::output::json::users_json;
use crate::output::text::users_table;

pub fn handle_users(ctx: &AppContext, args: &AdminViewArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    ctx.require_admin(&store)?;

    let users = store.list_users()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&users_json(&users))?);
        return Ok(());
    }

    if users.is_empty() {
        if !ctx.quiet() {
            println!("No accounts found.");
        }
        return Ok(());
    }

    println!("{}", users_table(&users));

    Ok(())
}
