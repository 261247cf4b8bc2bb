//! Show a single history record.
//!
//! Records owned by another account come back as "not found" rather than
//! an auth error, so record IDs don't leak existence. Admins can show any
//! record.

use uuid::Uuid;

use shiftpad_core::store::HistoryStore;

use crate::app::AppContext;
use crate::cli::HistoryShowArgs;
use crate::errors::CliError;
use crate::output::json::record_json;
use crate::output::text::format_datetime;

pub fn handle_show(ctx: &AppContext, args: &HistoryShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let user = ctx.require_user(&store)?;

    let id = Uuid::parse_str(&args.id)
        .map_err(|e| CliError::invalid_input(format!("Invalid record ID: {}", e)))?;

    let not_found = || {
        CliError::not_found(
            "Record not found",
            "Hint: Run `shiftpad history list` to see your records.",
        )
    };

    let Some(record) = store.get_record(&id)? else {
        return Err(not_found().into());
    };
    if record.user_id != Some(user.id) && !user.is_admin() {
        return Err(not_found().into());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record_json(&record))?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("ID: {}", record.id);
        println!("Action: {}", record.action.as_str());
        println!("Shift: {}", record.shift_key);
        println!("Created: {}", format_datetime(&record.created_at));
        println!("Input: {}", record.input_text);
    }
    println!("{}", record.output_text);

    Ok(())
}
