//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and control the session rather than being sent
//! to the agent.

use std::io::Write;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the chat history (asks first).
    Clear,
    /// Clear the terminal screen.
    Cls,
    /// Exit the chat session.
    Exit,
    /// Reprint the transcript.
    History,
    /// List configured accounts.
    Accounts,
    /// Switch the account scope.
    Account(String),
    /// Unknown or malformed command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd.to_lowercase(), arg.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" => Some(ChatCommand::Clear),
        "/cls" => Some(ChatCommand::Cls),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/accounts" => Some(ChatCommand::Accounts),
        "/account" if arg.is_empty() => {
            Some(ChatCommand::Unknown("/account requires an account id".to_string()))
        }
        "/account" => Some(ChatCommand::Account(arg.to_string())),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Write the help text listing all available commands.
pub fn print_help(out: &mut impl Write) {
    let rows = [
        ("/help", "Show this help message"),
        ("/clear", "Clear the chat history"),
        ("/cls", "Clear the screen"),
        ("/history", "Show the conversation so far"),
        ("/accounts", "List configured accounts"),
        ("/account <id>", "Scope commands to another account"),
        ("/exit", "End the chat session"),
    ];

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style("Available commands:").bold());
    let _ = writeln!(out);
    for (name, about) in rows {
        let _ = writeln!(out, "  {}  {about}", style(format!("{name:<14}")).cyan());
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}",
        style("Anything else is sent to the agent. Ctrl+D to exit.").dim()
    );
    let _ = writeln!(out);
}
