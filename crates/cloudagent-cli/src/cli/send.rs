//! One-shot `send` command: submit through the session store and print the reply.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use cloudagent_core::prompt::AlwaysConfirm;
use cloudagent_core::session::SubmitOutcome;

use crate::prompt::TerminalNotifier;
use crate::state::AppState;

use super::chat::renderer::ChatRenderer;

/// Send `command` once and print the agent's reply.
///
/// The exchange is recorded in the stored transcript exactly as in the chat
/// loop. A failed exchange still records the apology message, then exits
/// with an error.
pub async fn send_command(state: &AppState, command: &str, json: bool) -> anyhow::Result<()> {
    let store = state.open_session(TerminalNotifier, AlwaysConfirm).await?;

    let spinner = (!json).then(processing_spinner);
    let started = Instant::now();
    let outcome = store.submit(command).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let reply = match &outcome {
        SubmitOutcome::Ignored => anyhow::bail!("Nothing to send: command text is empty"),
        SubmitOutcome::Answered { reply } | SubmitOutcome::Failed { reply, .. } => reply,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
    } else {
        let renderer = ChatRenderer::new();
        println!();
        println!("  {} {}", renderer.label(reply.sender()), renderer.render_text(reply.text()).trim_end());
        println!(
            "\n  {} {:.1}s {} {}",
            style("|").dim(),
            style(started.elapsed().as_secs_f64()).dim(),
            style("\u{00b7}").dim(),
            style(store.scope()).dim(),
        );
        println!();
    }

    match outcome {
        SubmitOutcome::Failed { error, .. } => Err(error.into()),
        _ => Ok(()),
    }
}

/// Spinner shown while the backend works on the command.
pub fn processing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message("Processing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
