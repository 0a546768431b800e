//! Notifier and confirmer for the interactive chat loop.
//!
//! Notifications are written through the readline `SharedWriter` so they
//! don't break the prompt. Confirmation questions are sent to the loop,
//! which answers them from the next input line.

use std::io::Write;
use std::sync::Mutex;

use console::style;
use rustyline_async::SharedWriter;
use tokio::sync::{mpsc, oneshot};

use cloudagent_core::prompt::{Confirmer, Notifier};

/// A yes/no question waiting for the operator.
pub struct ConfirmRequest {
    pub question: String,
    pub reply: oneshot::Sender<bool>,
}

/// Writes notifications above the input line.
pub struct ChatNotifier {
    out: Mutex<SharedWriter>,
}

impl ChatNotifier {
    pub fn new(out: SharedWriter) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Notifier for ChatNotifier {
    fn error(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(out, "\n  {} {}", style("!").red().bold(), style(message).red());
    }
}

/// Forwards questions to the chat loop over a channel.
pub struct ChatConfirmer {
    requests: mpsc::Sender<ConfirmRequest>,
}

impl ChatConfirmer {
    pub fn new(requests: mpsc::Sender<ConfirmRequest>) -> Self {
        Self { requests }
    }
}

impl Confirmer for ChatConfirmer {
    /// Declines if the loop has gone away before answering.
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest {
            question: prompt.to_string(),
            reply,
        };
        if self.requests.send(request).await.is_err() {
            return false;
        }
        answer.await.unwrap_or(false)
    }
}
