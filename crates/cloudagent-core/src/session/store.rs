//! SessionStore -- single source of truth for the chat transcript.
//!
//! Submission lifecycle: `Idle --submit(valid)--> Pending --gateway resolves--> Idle`.
//! A submit with blank text, or while a command is pending, is a no-op.
//!
//! State lives behind a `std::sync::Mutex` that is never held across an
//! `.await`, so callers can read `is_pending()`/`messages()` (and attempt
//! further submits) while a gateway call is in flight.

use std::sync::{Mutex, MutexGuard};

use cloudagent_types::config::{AccountScope, ClientConfig, is_known_scope};
use cloudagent_types::error::{GatewayError, PersistenceError, ScopeError};
use cloudagent_types::message::Message;
use tracing::{debug, info, warn};

use crate::gateway::CommandGateway;
use crate::prompt::{Confirmer, Notifier};
use crate::storage::{TranscriptStorage, TRANSCRIPT_KEY};

use super::normalize::normalize_result;

/// First message of a fresh transcript.
pub const GREETING: &str =
    "Hello! I am your AI Cloud Operations Agent. How can I help you manage your AWS resources today?";

/// Sole message left after the history is cleared.
pub const CLEARED: &str = "Chat history cleared. How can I help you?";

/// Bot message appended when a command fails. Carries no error detail.
pub const FAILURE_REPLY: &str =
    "❌ An error occurred while communicating with the cloud agent backend. Please check the logs.";

/// Summary shown in the failure notification.
pub const FAILURE_NOTICE: &str = "Error executing command or unable to reach backend.";

/// Question asked before the history is cleared.
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear your chat history?";

/// Result of a [`SessionStore::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input, or a command was already pending. Nothing changed.
    Ignored,
    /// The backend answered; `reply` is the appended bot message.
    Answered { reply: Message },
    /// The exchange failed; `reply` is the appended apology message.
    Failed { reply: Message, error: GatewayError },
}

impl SubmitOutcome {
    /// The bot message appended by this submission, if any.
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Answered { reply } | SubmitOutcome::Failed { reply, .. } => Some(reply),
        }
    }
}

#[derive(Debug)]
struct SessionState {
    messages: Vec<Message>,
    pending: bool,
    draft: String,
    scope: String,
}

/// Chat session controller.
///
/// Generic over its collaborators so the CLI can pin concrete infra types and
/// tests can substitute doubles.
pub struct SessionStore<G, S, N, C>
where
    G: CommandGateway,
    S: TranscriptStorage,
    N: Notifier,
    C: Confirmer,
{
    gateway: G,
    storage: S,
    notifier: N,
    confirmer: C,
    accounts: Vec<AccountScope>,
    state: Mutex<SessionState>,
}

impl<G, S, N, C> SessionStore<G, S, N, C>
where
    G: CommandGateway,
    S: TranscriptStorage,
    N: Notifier,
    C: Confirmer,
{
    /// Build a session, seeding the transcript from storage.
    ///
    /// A missing, unreadable, or corrupt record falls back to the greeting.
    /// This never fails.
    pub async fn restore(
        gateway: G,
        storage: S,
        notifier: N,
        confirmer: C,
        config: &ClientConfig,
    ) -> Self {
        let messages = match storage.read(TRANSCRIPT_KEY).await {
            Ok(Some(record)) => match parse_transcript(&record) {
                Ok(messages) if !messages.is_empty() => {
                    info!(count = messages.len(), "Restored chat transcript");
                    messages
                }
                Ok(_) => {
                    debug!("Stored transcript is empty, starting with greeting");
                    vec![Message::bot(GREETING)]
                }
                Err(e) => {
                    warn!(error = %e, "Discarding stored transcript");
                    vec![Message::bot(GREETING)]
                }
            },
            Ok(None) => vec![Message::bot(GREETING)],
            Err(e) => {
                warn!(error = %e, "Could not read stored transcript");
                vec![Message::bot(GREETING)]
            }
        };

        Self {
            gateway,
            storage,
            notifier,
            confirmer,
            accounts: config.accounts.clone(),
            state: Mutex::new(SessionState {
                messages,
                pending: false,
                draft: String::new(),
                scope: config.default_scope(),
            }),
        }
    }

    // --- Read access ---

    /// Snapshot of the transcript in display order.
    pub fn messages(&self) -> Vec<Message> {
        self.state().messages.clone()
    }

    /// True exactly while a gateway call is in flight.
    pub fn is_pending(&self) -> bool {
        self.state().pending
    }

    pub fn draft(&self) -> String {
        self.state().draft.clone()
    }

    pub fn scope(&self) -> String {
        self.state().scope.clone()
    }

    pub fn accounts(&self) -> &[AccountScope] {
        &self.accounts
    }

    // --- Mutators ---

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state().draft = text.into();
    }

    /// Switch the account scope sent with subsequent commands.
    ///
    /// Only configured account ids are accepted; with no accounts configured
    /// the `"default"` sentinel is the only valid scope.
    pub fn select_scope(&self, id: &str) -> Result<(), ScopeError> {
        if !is_known_scope(&self.accounts, id) {
            return Err(ScopeError::Unknown(id.to_string()));
        }
        self.state().scope = id.to_string();
        info!(scope = %id, "Account scope selected");
        Ok(())
    }

    /// Submit the current draft.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }

    /// Send a command to the backend and record the exchange.
    ///
    /// The user message is appended and persisted before the gateway is
    /// called. Exactly one bot message is appended after it resolves, then
    /// `pending` is cleared and the transcript persisted again.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let command = text.trim();

        let (snapshot, scope) = {
            let mut state = self.state();
            if command.is_empty() || state.pending {
                debug!(pending = state.pending, "Submit ignored");
                return SubmitOutcome::Ignored;
            }
            state.messages.push(Message::user(command));
            state.draft.clear();
            state.pending = true;
            (state.messages.clone(), state.scope.clone())
        };
        let dispatch = Dispatch {
            state: &self.state,
            settled: false,
        };
        self.persist(&snapshot).await;

        debug!(scope = %scope, len = command.len(), "Dispatching command");
        let outcome = match self.gateway.execute(command, Some(scope.as_str())).await {
            Ok(raw) => SubmitOutcome::Answered {
                reply: Message::bot(normalize_result(raw).display_text()),
            },
            Err(error) => SubmitOutcome::Failed {
                reply: self.on_failure(&error),
                error,
            },
        };

        let snapshot = dispatch.settle(outcome.reply());
        self.persist(&snapshot).await;

        outcome
    }

    /// Replace the transcript with the "history cleared" message.
    ///
    /// Waits for the confirmer first; returns `false` (and changes nothing)
    /// if the operator declines.
    pub async fn clear(&self) -> bool {
        if !self.confirmer.confirm(CLEAR_PROMPT).await {
            debug!("Clear declined");
            return false;
        }

        let snapshot = {
            let mut state = self.state();
            state.messages = vec![Message::bot(CLEARED)];
            state.messages.clone()
        };
        self.persist(&snapshot).await;
        info!("Chat history cleared");
        true
    }

    // --- Internals ---

    /// Report a failed exchange and build the apology message.
    ///
    /// The detail goes to the notification and the log only.
    fn on_failure(&self, error: &GatewayError) -> Message {
        warn!(error = %error, "Command failed");
        self.notifier.error(&format!("{FAILURE_NOTICE} ({error})"));
        Message::bot(FAILURE_REPLY)
    }

    /// Write the transcript to storage. Failures are logged and dropped.
    async fn persist(&self, messages: &[Message]) {
        let record = match serde_json::to_string(messages) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Failed to serialize transcript");
                return;
            }
        };
        if let Err(e) = self.storage.write(TRANSCRIPT_KEY, &record).await {
            warn!(error = %e, "Failed to persist transcript");
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// An exchange between dispatch and reply.
///
/// If the `submit` future is dropped before the gateway resolves, the user
/// turn still gets the apology and `pending` is cleared. That reply reaches
/// storage with the next persist.
struct Dispatch<'a> {
    state: &'a Mutex<SessionState>,
    settled: bool,
}

impl Dispatch<'_> {
    /// Append the reply, clear `pending`, and return the transcript to persist.
    fn settle(mut self, reply: Option<&Message>) -> Vec<Message> {
        self.settled = true;
        let mut state = lock_state(self.state);
        if let Some(reply) = reply {
            state.messages.push(reply.clone());
        }
        state.pending = false;
        state.messages.clone()
    }
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Command abandoned before the backend answered");
        let mut state = lock_state(self.state);
        state.messages.push(Message::bot(FAILURE_REPLY));
        state.pending = false;
    }
}

/// Parse a stored transcript record.
pub fn parse_transcript(record: &str) -> Result<Vec<Message>, PersistenceError> {
    serde_json::from_str(record).map_err(|e| PersistenceError::Corrupt(e.to_string()))
}
