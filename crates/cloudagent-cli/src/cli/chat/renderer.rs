//! Terminal rendering for transcript messages.
//!
//! `ChatRenderer` combines `termimad` for the agent's prose and `syntect` for
//! JSON payloads, which the session shows pretty-printed when the backend
//! answers with structured data.

use console::style;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

use cloudagent_types::message::Sender;

const THEME: &str = "base16-ocean.dark";

/// Terminal markdown renderer with JSON highlighting.
pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Styled "You" / "Agent" label.
    pub fn label(&self, sender: Sender) -> String {
        let label = format!("{} >", sender.label());
        match sender {
            Sender::User => style(label).green().bold().to_string(),
            Sender::Bot => style(label).cyan().bold().to_string(),
        }
    }

    /// Render message text: JSON documents highlighted, everything else as markdown.
    pub fn render_text(&self, text: &str) -> String {
        if looks_like_json(text) {
            self.highlight_json(text)
        } else {
            self.skin.term_text(text).to_string()
        }
    }

    fn highlight_json(&self, code: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("json")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let Some(theme) = self.theme_set.themes.get(THEME) else {
            return code.to_string();
        };
        let mut h = HighlightLines::new(syntax, theme);

        let mut output = String::from("\n");
        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("    {escaped}\x1b[0m\n"));
        }
        output
    }
}

/// Whether `text` is a JSON object or array (as produced for structured results).
pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim_start();
    (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_json() {
        assert!(looks_like_json("{\n  \"instances\": 3\n}"));
        assert!(looks_like_json("[1, 2]"));
        assert!(!looks_like_json("42"));
        assert!(!looks_like_json("\"quoted\""));
        assert!(!looks_like_json("[link](http://example.com)"));
        assert!(!looks_like_json("3 instances are running"));
    }

    #[test]
    fn test_render_json_keeps_every_line() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render_text("{\n  \"region\": \"us-east-1\"\n}");
        assert!(rendered.contains("region"));
        assert!(rendered.contains("us-east-1"));
        assert_eq!(rendered.matches('\n').count(), 4);
    }

    #[test]
    fn test_render_prose_keeps_words() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render_text("Stopped 2 instances");
        assert!(rendered.contains("Stopped 2 instances"));
    }

    #[test]
    fn test_labels() {
        let renderer = ChatRenderer::new();
        assert!(renderer.label(Sender::User).contains("You"));
        assert!(renderer.label(Sender::Bot).contains("Agent"));
    }
}
