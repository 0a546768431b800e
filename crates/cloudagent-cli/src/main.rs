//! Cloud agent chat client entry point.
//!
//! Binary name: `cloudagent`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then runs the
//! interactive chat loop or the requested one-shot command.

mod cli;
mod prompt;
mod state;

use clap::Parser;
use clap_complete::generate;

use cloudagent_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    // Shell completions don't need app state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "cloudagent", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.base_url.clone(), cli.account.clone()).await;

    let result = match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await,
        Commands::Send { command } => cli::send::send_command(&state, &command.join(" "), cli.json).await,
        Commands::History => cli::history::show_history(&state, cli.json).await,
        Commands::Clear { force } => cli::history::clear_history(&state, force, cli.json).await,
        Commands::Accounts => cli::accounts::list_accounts(&state, cli.json),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
