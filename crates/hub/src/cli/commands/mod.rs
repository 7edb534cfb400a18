//! Command implementations and dispatch.

pub mod browse;
pub mod init;
pub mod prefs;
pub mod render;
pub mod search;
pub mod show;
pub mod status;
pub mod topics;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub async fn run(command: Commands) -> ExitCode {
    // init and prefs must work without a valid configuration.
    let ctx = match &command {
        Commands::Init(_) | Commands::Prefs(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match command {
        Commands::Init(cmd) => init::run(&ctx, &cmd),
        Commands::Topics(cmd) => topics::run(&mut ctx, &cmd),
        Commands::Search(cmd) => search::run(&mut ctx, &cmd).await,
        Commands::Show(cmd) => show::run(&mut ctx, &cmd),
        Commands::Render(cmd) => render::run(&mut ctx, &cmd),
        Commands::Browse => browse::run(&mut ctx).await,
        Commands::Prefs(cmd) => prefs::run(&cmd),
        Commands::Status => status::run(&mut ctx).await,
    }
}
