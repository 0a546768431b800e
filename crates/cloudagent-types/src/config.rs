//! Client configuration types.
//!
//! `ClientConfig` represents `config.toml` in the data directory. It controls
//! where commands are sent, how long a single command may take, and which
//! account scopes the operator can pick from.

use serde::{Deserialize, Serialize};

/// Scope identifier used when no account list is configured.
pub const DEFAULT_SCOPE: &str = "default";

/// Top-level configuration for the chat client.
///
/// Loaded from `~/.cloudagent/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the agent backend (without the `/api/execute` path).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on a single command exchange, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Accounts the operator can scope commands to.
    #[serde(default = "default_accounts")]
    pub accounts: Vec<AccountScope>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    900
}

fn default_accounts() -> Vec<AccountScope> {
    vec![AccountScope {
        id: DEFAULT_SCOPE.to_string(),
        name: "Local Test Account (Access Keys)".to_string(),
    }]
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            accounts: default_accounts(),
        }
    }
}

impl ClientConfig {
    /// The scope selected at startup: the first configured account, or the
    /// `"default"` sentinel when none are configured.
    pub fn default_scope(&self) -> String {
        self.accounts
            .first()
            .map(|a| a.id.clone())
            .unwrap_or_else(|| DEFAULT_SCOPE.to_string())
    }

    /// Whether `id` may be selected as the command scope.
    pub fn knows_scope(&self, id: &str) -> bool {
        is_known_scope(&self.accounts, id)
    }
}

/// Scope validation shared by the CLI and the session store: a configured
/// account id, or the `"default"` sentinel when no accounts are configured.
pub fn is_known_scope(accounts: &[AccountScope], id: &str) -> bool {
    if accounts.is_empty() {
        id == DEFAULT_SCOPE
    } else {
        accounts.iter().any(|a| a.id == id)
    }
}

/// An account the backend can run commands against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountScope {
    /// Opaque identifier sent as `account_id`.
    pub id: String,
    /// Human-readable name shown in the account list.
    pub name: String,
}
