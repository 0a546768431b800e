//! Transcript message types.
//!
//! A transcript is an append-only, ordered `Vec<Message>`. Index order is the
//! display order and the persisted order. The serialized form
//! (`{"sender":"user","text":"..."}`) is the durable-storage record format.

use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label shown next to the message in the chat view.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Agent",
        }
    }
}

/// A single entry in the chat transcript.
///
/// The sender is fixed at creation; there are no setters. User messages
/// always carry the trimmed, non-empty command text that was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// A message typed by the operator.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// A message produced by the agent (or a synthetic status message).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::Bot.label(), "Agent");
    }

    #[test]
    fn test_message_wire_format() {
        let msg = Message::user("list ec2 instances");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"list ec2 instances"}"#);
    }

    #[test]
    fn test_transcript_parses_browser_record() {
        let record = r#"[
            {"sender":"bot","text":"Hello!"},
            {"sender":"user","text":"describe stacks"}
        ]"#;
        let messages: Vec<Message> = serde_json::from_str(record).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), Sender::Bot);
        assert_eq!(messages[1].sender(), Sender::User);
        assert_eq!(messages[1].text(), "describe stacks");
    }

    #[test]
    fn test_unknown_sender_rejected() {
        let record = r#"[{"sender":"system","text":"x"}]"#;
        assert!(serde_json::from_str::<Vec<Message>>(record).is_err());
    }
}
