//! Sign out. Succeeds whether or not a session exists.

use shiftpad_core::session::SessionProvider;

use crate::app::AppContext;

pub fn handle_logout(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session()?.sign_out()?;

    if !ctx.quiet() {
        println!("Signed out.");
    }

    Ok(())
}
