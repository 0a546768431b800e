//! `history` and `clear` commands over the stored transcript.

use console::style;

use cloudagent_core::prompt::{AlwaysConfirm, Confirmer};

use crate::prompt::{DialoguerConfirmer, TerminalNotifier};
use crate::state::AppState;

use super::chat::renderer::ChatRenderer;

/// Print every stored message in order.
pub async fn show_history(state: &AppState, json: bool) -> anyhow::Result<()> {
    let store = state.open_session(TerminalNotifier, AlwaysConfirm).await?;
    let messages = store.messages();

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    let renderer = ChatRenderer::new();
    println!();
    for message in &messages {
        println!(
            "  {} {}",
            renderer.label(message.sender()),
            renderer.render_text(message.text()).trim_end()
        );
        println!();
    }
    println!("  {}", style(format!("{} messages", messages.len())).dim());
    Ok(())
}

/// Clear the stored transcript, asking first unless `force` is set.
pub async fn clear_history(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    let cleared = if force {
        clear_with(state, AlwaysConfirm).await?
    } else {
        clear_with(state, DialoguerConfirmer).await?
    };

    if json {
        println!("{}", serde_json::json!({ "cleared": cleared }));
    } else if cleared {
        println!("\n  {} Chat history cleared.\n", style("*").green().bold());
    } else {
        println!("  Cancelled.");
    }
    Ok(())
}

async fn clear_with<C: Confirmer>(state: &AppState, confirmer: C) -> anyhow::Result<bool> {
    let store = state.open_session(TerminalNotifier, confirmer).await?;
    Ok(store.clear().await)
}
