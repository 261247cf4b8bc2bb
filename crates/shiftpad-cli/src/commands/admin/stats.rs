//! Aggregate usage stats (admin view).

use shiftpad_core::cipher::Direction;
use shiftpad_core::store::{HistoryFilter, HistoryStore, UserStore};

use crate::app::AppContext;
use crate::cli::AdminViewArgs;

pub fn handle_stats(ctx: &AppContext, args: &AdminViewArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    ctx.require_admin(&store)?;

    let total_users = store.list_users()?.len() as u64;
    let total_records = store.count_records(&HistoryFilter::new())?;
    let encrypt_records =
        store.count_records(&HistoryFilter::new().action(Direction::Encrypt))?;
    let decrypt_records =
        store.count_records(&HistoryFilter::new().action(Direction::Decrypt))?;

    if args.json {
        let value = serde_json::json!({
            "total_users": total_users,
            "total_records": total_records,
            "encrypt_records": encrypt_records,
            "decrypt_records": decrypt_records,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Users:   {}", total_users);
    println!("Records: {}", total_records);
    println!("  encrypt: {}", encrypt_records);
    println!("  decrypt: {}", decrypt_records);

    Ok(())
}
