//! Command payloads exchanged with the agent backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/execute`.
///
/// `account_id` is serialized as `null` when no scope is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub command: String,
    pub account_id: Option<String>,
}

impl ExecuteRequest {
    pub fn new(command: impl Into<String>, account_id: Option<&str>) -> Self {
        Self {
            command: command.into(),
            account_id: account_id.map(str::to_string),
        }
    }
}

/// A successful backend result, classified by shape for display.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Text shown verbatim (a `response` string or a scalar's string form).
    Text(String),
    /// Arbitrary JSON shown pretty-printed.
    Structured(serde_json::Value),
}

impl CommandResult {
    /// The text that goes into the transcript for this result.
    pub fn display_text(&self) -> String {
        match self {
            CommandResult::Text(text) => text.clone(),
            CommandResult::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}
