//! Show the signed-in account.

use shiftpad_core::session::SessionProvider;

use crate::app::AppContext;
use crate::cli::WhoamiArgs;
use crate::output::json::user_json;
use crate::output::text::format_datetime;

pub fn handle_whoami(ctx: &AppContext, args: &WhoamiArgs) -> anyhow::Result<()> {
    let session = ctx.session()?;

    if session.current()?.is_none() {
        if args.json {
            println!("{}", serde_json::json!({ "signed_in": false }));
        } else {
            println!("Not signed in.");
        }
        return Ok(());
    }

    let store = ctx.open_store()?;
    let user = ctx.require_user(&store)?;

    if args.json {
        let mut value = user_json(&user);
        value["signed_in"] = serde_json::Value::Bool(true);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Email: {}", user.email);
    println!("Name: {}", user.name);
    println!("Role: {}", user.role.as_str());
    println!("Member since: {}", format_datetime(&user.created_at));
    if let Some(ref last_login) = user.last_login {
        println!("Last login: {}", format_datetime(last_login));
    }

    Ok(())
}
