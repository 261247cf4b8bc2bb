use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use shiftpad_core::VERSION;

/// Shiftpad - a Caesar-cipher workbench with per-account history
#[derive(Parser)]
#[command(name = "shiftpad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(long, global = true, env = "SHIFTPAD_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Bootstrap an admin account with this email
    #[arg(long, value_name = "EMAIL")]
    pub admin_email: Option<String>,

    /// Display name for the bootstrapped admin
    #[arg(long, value_name = "NAME")]
    pub admin_name: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args)]
pub struct TransformArgs {
    /// Text to transform (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Shift key (1-25)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..=25))]
    pub shift: Option<i64>,

    /// Do not record this transform in history
    #[arg(long)]
    pub no_save: bool,
}

/// Arguments for `history list`
#[derive(Args)]
pub struct HistoryListArgs {
    /// Filter by action (encrypt, decrypt)
    #[arg(long, value_name = "ACTION")]
    pub action: Option<String>,

    /// Time window (e.g., "7d", "24h")
    #[arg(long)]
    pub last: Option<String>,

    /// Start date (ISO-8601)
    #[arg(long)]
    pub since: Option<String>,

    /// End date (ISO-8601)
    #[arg(long)]
    pub until: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `history show`
#[derive(Args)]
pub struct HistoryShowArgs {
    /// Record ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `history export`
#[derive(Args)]
pub struct HistoryExportArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Start date (ISO-8601)
    #[arg(long)]
    pub since: Option<String>,
}

/// Arguments for the `signup` command
#[derive(Args)]
pub struct SignupArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: Option<String>,

    /// Display name for the new account
    #[arg(long)]
    pub name: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `login` command
#[derive(Args)]
pub struct LoginArgs {
    /// Email address to sign in with
    #[arg(long)]
    pub email: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `whoami` command
#[derive(Args)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `admin users` and `admin stats`
#[derive(Args)]
pub struct AdminViewArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `admin remove-user`
#[derive(Args)]
pub struct RemoveUserArgs {
    /// Email of the account to remove
    #[arg(value_name = "EMAIL")]
    pub email: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List your transform history
    List(HistoryListArgs),

    /// Show a specific record by ID
    Show(HistoryShowArgs),

    /// Export your history (portable formats, you own your data)
    Export(HistoryExportArgs),
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List registered accounts
    Users(AdminViewArgs),

    /// Show aggregate usage stats
    Stats(AdminViewArgs),

    /// Remove an account (history is kept, detached)
    #[command(name = "remove-user")]
    RemoveUser(RemoveUserArgs),
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new store
    Init(InitArgs),

    /// Encrypt text with a shift key
    Encrypt(TransformArgs),

    /// Decrypt text with a shift key
    Decrypt(TransformArgs),

    /// Work with your transform history
    #[command(subcommand)]
    History(HistoryCommands),

    /// Create an account
    Signup(SignupArgs),

    /// Sign in
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami(WhoamiArgs),

    /// Admin views (requires an admin account)
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Check store integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
