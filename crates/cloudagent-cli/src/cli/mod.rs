//! CLI command definitions and dispatch for the `cloudagent` binary.
//!
//! Uses clap derive macros for argument parsing. With no subcommand the
//! interactive chat loop starts.

pub mod accounts;
pub mod chat;
pub mod history;
pub mod send;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the cloud operations agent from your terminal.
#[derive(Parser)]
#[command(name = "cloudagent", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Agent backend base URL (overrides config.toml).
    #[arg(long, global = true, env = "CLOUDAGENT_API_BASE")]
    pub base_url: Option<String>,

    /// Account id to scope commands to (must be configured).
    #[arg(short, long, global = true)]
    pub account: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (default).
    Chat,

    /// Send a single command and print the agent's reply.
    Send {
        /// Command text, e.g. `list running ec2 instances`.
        #[arg(required = true, trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Show the stored chat transcript.
    History,

    /// Clear the stored chat transcript.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// List configured accounts.
    Accounts,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
