//! Miscellaneous command handlers: integrity check, shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs};
use crate::errors::CliError;
use crate::output::text::ok_badge;

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    match store.check_integrity() {
        Ok(()) => {
            if !ctx.quiet() {
                println!("Integrity check: {}", ok_badge());
                println!("- foreign keys: OK");
                println!("- tables: OK");
                println!("- metadata keys: OK");
            }
            Ok(())
        }
        Err(err) => Err(CliError::integrity(
            err.to_string(),
            "Hint: Restore the store from a backup copy.",
        )
        .into()),
    }
}

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "shiftpad", &mut std::io::stdout());
    Ok(())
}
