//! Chat bubble formatter
//!
//! Renders transcript entries as terminal "bubbles": the user's messages are
//! right-aligned to the configured width, the assistant's are left-aligned
//! under its name. Rendering is a pure function of the messages.

use crate::config::OutputConfig;
use colored::Colorize;
use webchat_domain::{ChatMessage, Sender};

const USER_LABEL: &str = "You";
const BAR: &str = "│";

/// Formats chat messages for console display
#[derive(Debug, Clone)]
pub struct BubbleFormatter {
    width: usize,
    color: bool,
    assistant_name: String,
}

impl BubbleFormatter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            width: config.width,
            color: config.color,
            assistant_name: config.assistant_name.clone(),
        }
    }

    /// Format one message as a (possibly multi-line) bubble
    pub fn format_message(&self, message: &ChatMessage) -> String {
        match message.sender {
            Sender::Sent => self.format_sent(&message.content),
            Sender::Received => self.format_received(&message.content),
        }
    }

    /// Format every message, in transcript order
    pub fn format_transcript<'a>(
        &self,
        messages: impl IntoIterator<Item = &'a ChatMessage>,
    ) -> Vec<String> {
        messages
            .into_iter()
            .map(|m| self.format_message(m))
            .collect()
    }

    /// Format a status line shown between bubbles
    pub fn format_notice(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_sent(&self, content: &str) -> String {
        let label_width = USER_LABEL.chars().count();
        content_lines(content)
            .enumerate()
            .map(|(i, line)| {
                let label = if i == 0 {
                    USER_LABEL.to_string()
                } else {
                    " ".repeat(label_width)
                };
                let plain_len = line.chars().count() + 3 + label_width;
                let pad = " ".repeat(self.width.saturating_sub(plain_len));
                format!(
                    "{}{} {} {}",
                    pad,
                    self.paint_sent(line),
                    self.paint_bar(),
                    self.paint_label(&label, Sender::Sent)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_received(&self, content: &str) -> String {
        let label_width = self.assistant_name.chars().count();
        content_lines(content)
            .enumerate()
            .map(|(i, line)| {
                let label = if i == 0 {
                    self.assistant_name.clone()
                } else {
                    " ".repeat(label_width)
                };
                format!(
                    "{} {} {}",
                    self.paint_label(&label, Sender::Received),
                    self.paint_bar(),
                    line
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint_sent(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bar(&self) -> String {
        if self.color {
            BAR.dimmed().to_string()
        } else {
            BAR.to_string()
        }
    }

    fn paint_label(&self, label: &str, sender: Sender) -> String {
        match (self.color, sender) {
            (false, _) => label.to_string(),
            (true, Sender::Sent) => label.cyan().bold().to_string(),
            (true, Sender::Received) => label.green().bold().to_string(),
        }
    }
}

impl Default for BubbleFormatter {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

/// Content split into display lines; empty content still yields one line
fn content_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        lines.push("");
    }
    lines.into_iter()
}
