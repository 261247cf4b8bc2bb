//! Encrypt/decrypt command handler.
//!
//! The transformed text is the command's stdout; status chatter goes to
//! stderr so the output stays pipeable. History is recorded only for a
//! signed-in account, matching the original behavior for anonymous
//! visitors, and `--no-save` opts out explicitly.

use shiftpad_core::cipher::{transform, Direction};
use shiftpad_core::session::SessionProvider;
use shiftpad_core::store::{HistoryStore, NewHistoryRecord, UserStore};

use crate::app::AppContext;
use crate::cli::TransformArgs;
use crate::errors::CliError;
use crate::helpers::read_text_input;
use crate::output::text::short_id;

pub fn handle_transform(
    ctx: &AppContext,
    args: &TransformArgs,
    direction: Direction,
) -> anyhow::Result<()> {
    let text = read_text_input(args.text.as_deref())?;
    let shift = ctx.resolve_shift(args.shift)?;

    let output = transform(&text, shift, direction);
    println!("{}", output);

    if args.no_save {
        return Ok(());
    }

    // Anonymous invocations never touch the store.
    let session = ctx.session()?;
    let Some(identity) = session.current()? else {
        return Ok(());
    };

    let store = ctx.open_store()?;
    let Some(user) = store.get_user(&identity.user_id)? else {
        return Err(CliError::auth_failed_with_hint(
            format!("Session references an unknown account ({})", identity.email),
            "Hint: Run `shiftpad logout` to clear it.",
        )
        .into());
    };

    let record =
        NewHistoryRecord::new(text, output, shift, direction).with_user(user.id);
    let record_id = store.append_record(&record)?;

    if !ctx.quiet() {
        eprintln!("Saved to history ({})", short_id(&record_id));
    }

    Ok(())
}
