//! Terminal implementations of the notification and confirmation traits
//! for one-shot commands. The interactive chat loop has its own pair in
//! `cli::chat::collaborators`.

use console::style;
use dialoguer::Confirm;

use cloudagent_core::prompt::{Confirmer, Notifier};

/// Prints notifications to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("\n  {} {}", style("!").red().bold(), style(message).red());
    }
}

/// Asks on the terminal with a dialoguer prompt (default: no).
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }
}
