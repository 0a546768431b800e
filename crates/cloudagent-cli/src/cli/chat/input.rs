//! Line input for the chat loop.
//!
//! `rustyline_async` keeps the prompt alive while output is printed through
//! its `SharedWriter`, which is what lets the loop print an agent reply while
//! the operator is typing the next command.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug)]
pub enum InputEvent {
    /// A submitted line, trimmed.
    Line(String),
    /// Ctrl+D, or the terminal went away.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Put the terminal in line-editing mode. The returned writer is the only
    /// safe way to print while the prompt is up.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, out) = Readline::new(prompt)?;
        Ok((Self { rl }, out))
    }

    /// Swap the prompt, e.g. to ask a yes/no question.
    pub fn set_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Wait for the next line. Non-empty lines go into the up-arrow history.
    pub async fn next_event(&mut self) -> InputEvent {
        let event = match self.rl.readline().await {
            Ok(event) => event,
            Err(_) => return InputEvent::Eof,
        };

        match event {
            ReadlineEvent::Line(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    let _ = self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            ReadlineEvent::Eof => InputEvent::Eof,
            ReadlineEvent::Interrupted => InputEvent::Interrupted,
        }
    }

    pub fn clear_screen(&mut self) {
        let _ = self.rl.clear();
    }
}

/// Answer to a yes/no question; only an explicit yes counts.
pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
