//! Account command handlers: signup, login, logout, whoami.

mod login;
mod logout;
mod signup;
mod whoami;

pub use login::handle_login;
pub use logout::handle_logout;
pub use signup::handle_signup;
pub use whoami::handle_whoami;
