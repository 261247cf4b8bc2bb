//! Shiftpad CLI - a Caesar-cipher workbench with per-account history
//!
//! This is the command-line interface for Shiftpad. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;

use shiftpad_core::cipher::Direction;
use shiftpad_core::VERSION;

use app::AppContext;
use cli::{AdminCommands, Cli, Commands, HistoryCommands};
use errors::CliError;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => commands::init::handle_init(ctx, args),
        Some(Commands::Encrypt(args)) => {
            commands::transform::handle_transform(ctx, args, Direction::Encrypt)
        }
        Some(Commands::Decrypt(args)) => {
            commands::transform::handle_transform(ctx, args, Direction::Decrypt)
        }
        Some(Commands::History(command)) => match command {
            HistoryCommands::List(args) => commands::history::handle_list(ctx, args),
            HistoryCommands::Show(args) => commands::history::handle_show(ctx, args),
            HistoryCommands::Export(args) => commands::history::handle_export(ctx, args),
        },
        Some(Commands::Signup(args)) => commands::account::handle_signup(ctx, args),
        Some(Commands::Login(args)) => commands::account::handle_login(ctx, args),
        Some(Commands::Logout) => commands::account::handle_logout(ctx),
        Some(Commands::Whoami(args)) => commands::account::handle_whoami(ctx, args),
        Some(Commands::Admin(command)) => match command {
            AdminCommands::Users(args) => commands::admin::handle_users(ctx, args),
            AdminCommands::Stats(args) => commands::admin::handle_stats(ctx, args),
            AdminCommands::RemoveUser(args) => commands::admin::handle_remove_user(ctx, args),
        },
        Some(Commands::Check) => commands::misc::handle_check(ctx),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args),
        None => {
            println!("Shiftpad v{}", VERSION);
            println!();
            println!("Quickstart:");
            println!("  shiftpad init                  Create a local store");
            println!("  shiftpad encrypt \"HELLO\" -s 3  Transform text");
            println!("  shiftpad signup                Create an account");
            println!("  shiftpad login                 Sign in to record history");
            println!("  shiftpad history list          Browse your transforms");
            println!();
            println!("Run `shiftpad --help` for usage information.");
            Ok(())
        }
    }
}
