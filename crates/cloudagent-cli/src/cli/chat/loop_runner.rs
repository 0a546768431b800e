//! Main chat loop orchestration.
//!
//! Owns the readline input, the session store, and at most one in-flight
//! exchange. Input keeps being read while the agent works, so slash commands
//! stay usable and a second command is turned away instead of queued.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::time::Instant;

use console::style;
use rustyline_async::SharedWriter;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use cloudagent_core::session::SubmitOutcome;
use cloudagent_types::message::Message;

use crate::cli::accounts::accounts_table;
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::collaborators::{ChatConfirmer, ChatNotifier, ConfirmRequest};
use super::commands::{self, ChatCommand};
use super::input::{parse_yes, ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// A running store operation polled by the loop.
type Slot<'a, T> = Option<Pin<Box<dyn Future<Output = T> + 'a>>>;

/// Wait for the operation in `slot`, or forever if there is none.
async fn poll_slot<T>(slot: &mut Slot<'_, T>) -> T {
    match slot.as_mut() {
        Some(operation) => operation.await,
        None => std::future::pending().await,
    }
}

/// Run the interactive chat loop until `/exit` or Ctrl+D.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, mut out) = ChatInput::new(prompt.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let (confirm_tx, mut confirm_rx) = mpsc::channel::<ConfirmRequest>(1);
    let store = state
        .open_session(ChatNotifier::new(out.clone()), ChatConfirmer::new(confirm_tx))
        .await?;
    let renderer = ChatRenderer::new();

    print_welcome_banner(&mut out, &state.config.base_url, &store.scope(), &state.data_dir);
    print_transcript(&mut out, &renderer, &store.messages());
    info!(messages = store.messages().len(), scope = %store.scope(), "Chat session started");

    let mut in_flight: Slot<'_, SubmitOutcome> = None;
    let mut clearing: Slot<'_, bool> = None;
    let mut answer_to: Option<oneshot::Sender<bool>> = None;
    let mut started = Instant::now();

    loop {
        tokio::select! {
            outcome = poll_slot(&mut in_flight) => {
                in_flight = None;
                if let Some(reply) = outcome.reply() {
                    print_message(&mut out, &renderer, reply);
                }
                let _ = writeln!(
                    out,
                    "  {} {:.1}s {} {}\n",
                    style("|").dim(),
                    style(started.elapsed().as_secs_f64()).dim(),
                    style("\u{00b7}").dim(),
                    style(store.scope()).dim(),
                );
            }
            cleared = poll_slot(&mut clearing) => {
                clearing = None;
                input.set_prompt(&prompt);
                if cleared {
                    print_transcript(&mut out, &renderer, &store.messages());
                } else {
                    let _ = writeln!(out, "  {}\n", style("History kept.").dim());
                }
            }
            Some(request) = confirm_rx.recv() => {
                let question = format!("  {} {} ", style(&request.question).yellow().bold(), style("[y/N]").dim());
                input.set_prompt(&question);
                answer_to = Some(request.reply);
            }
            event = input.next_event() => {
                let line = match event {
                    InputEvent::Line(line) => line,
                    InputEvent::Interrupted => {
                        if let Some(reply) = answer_to.take() {
                            let _ = reply.send(false);
                        } else {
                            let _ = writeln!(out, "\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                        }
                        continue;
                    }
                    InputEvent::Eof => break,
                };

                // An open question takes the line as its answer.
                if let Some(reply) = answer_to.take() {
                    let _ = reply.send(parse_yes(&line));
                    continue;
                }

                if line.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&line) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(&mut out),
                        ChatCommand::Cls => input.clear_screen(),
                        ChatCommand::Exit => break,
                        ChatCommand::History => print_transcript(&mut out, &renderer, &store.messages()),
                        ChatCommand::Accounts => {
                            let _ = writeln!(out, "\n{}\n", accounts_table(store.accounts(), &store.scope()));
                        }
                        ChatCommand::Account(id) => match store.select_scope(&id) {
                            Ok(()) => {
                                let _ = writeln!(out, "\n  {} Commands now run against {}\n", style("*").cyan().bold(), style(&id).bold());
                            }
                            Err(e) => {
                                let _ = writeln!(out, "\n  {} {e}. Type /accounts to list them.\n", style("?").yellow().bold());
                            }
                        },
                        ChatCommand::Clear => {
                            if in_flight.is_some() {
                                let _ = writeln!(out, "  {}", style("Wait for the current command to finish before clearing.").dim());
                            } else if clearing.is_none() {
                                clearing = Some(Box::pin(store.clear()));
                            }
                        }
                        ChatCommand::Unknown(name) => {
                            let _ = writeln!(
                                out,
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                if in_flight.is_some() || clearing.is_some() {
                    debug!("Input ignored while a command is in flight");
                    let _ = writeln!(out, "  {}", style("Still processing the previous command; try again when it finishes.").dim());
                    continue;
                }

                store.set_draft(line);
                let _ = writeln!(out, "  {}", style("Processing...").dim());
                started = Instant::now();
                in_flight = Some(Box::pin(store.submit_draft()));
            }
        }
    }

    // No cancellation: a dispatched command always gets its reply recorded.
    if let Some(operation) = in_flight.take() {
        let _ = writeln!(out, "  {}", style("Waiting for the last command to finish...").dim());
        if let Some(reply) = operation.await.reply() {
            print_message(&mut out, &renderer, reply);
        }
    }
    drop(clearing);

    let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
    info!("Chat session ended");
    Ok(())
}

fn print_message(out: &mut SharedWriter, renderer: &ChatRenderer, message: &Message) {
    let _ = writeln!(
        out,
        "\n  {} {}",
        renderer.label(message.sender()),
        renderer.render_text(message.text()).trim_end()
    );
}

fn print_transcript(out: &mut SharedWriter, renderer: &ChatRenderer, messages: &[Message]) {
    for message in messages {
        print_message(out, renderer, message);
    }
    let _ = writeln!(out);
}
