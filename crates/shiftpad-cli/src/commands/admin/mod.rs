//! Admin command handlers. Every handler gates on a signed-in admin.

mod remove_user;
mod stats;
mod users;

pub use remove_user::handle_remove_user;
pub use stats::handle_stats;
pub use users::handle_users;
