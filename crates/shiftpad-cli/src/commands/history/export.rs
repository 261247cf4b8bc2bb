//! Export the caller's history to stdout.

use shiftpad_core::store::{HistoryFilter, HistoryStore};

use crate::app::AppContext;
use crate::cli::HistoryExportArgs;
use crate::helpers::parse_datetime;
use crate::output::json::records_json;

pub fn handle_export(ctx: &AppContext, args: &HistoryExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let user = ctx.require_user(&store)?;

    let mut filter = HistoryFilter::new().user(user.id);
    if let Some(ref value) = args.since {
        filter = filter.since(parse_datetime(value)?);
    }

    let records = store.list_records(&filter)?;
    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
        }
        "jsonl" => {
            for value in records_json(&records) {
                println!("{}", serde_json::to_string(&value)?);
            }
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ));
        }
    }

    Ok(())
}
