//! List the caller's transform history, newest first.

use chrono::Utc;

use shiftpad_core::store::{HistoryFilter, HistoryStore};

use crate::app::AppContext;
use crate::cli::HistoryListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::{
    parse_action, parse_datetime, parse_duration, parse_output_format, OutputFormat,
};
use crate::output::json::records_json;
use crate::output::text::{history_plain_line, history_table};

pub fn handle_list(ctx: &AppContext, args: &HistoryListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let user = ctx.require_user(&store)?;

    let mut filter = HistoryFilter::new().user(user.id);
    if let Some(ref value) = args.action {
        filter = filter.action(parse_action(value)?);
    }
    if let Some(ref value) = args.last {
        let window = parse_duration(value)?;
        filter = filter.since(Utc::now() - window);
    }
    if let Some(ref value) = args.since {
        filter = filter.since(parse_datetime(value)?);
    }
    if let Some(ref value) = args.until {
        filter = filter.until(parse_datetime(value)?);
    }
    filter = filter.limit(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    let records = store.list_records(&filter)?;

    let format = parse_output_format(args.format.as_deref())?;
    if args.json {
        if format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
        return Ok(());
    }

    if records.is_empty() {
        if !ctx.quiet() {
            println!("No records found.");
        }
        return Ok(());
    }

    match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => {
            println!("{}", history_table(&records));
        }
        OutputFormat::Plain => {
            for record in &records {
                println!("{}", history_plain_line(record));
            }
        }
    }

    Ok(())
}
