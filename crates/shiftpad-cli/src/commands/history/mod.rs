//! History command handlers.

mod export;
mod list;
mod show;

pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;
