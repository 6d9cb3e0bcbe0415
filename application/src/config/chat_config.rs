//! Chat session configuration

/// Greeting shown before any user interaction
pub const DEFAULT_GREETING: &str = "Hello. I am an AI assistant. How can I help you?";

/// Settings applied when a [`TranscriptController`](crate::TranscriptController)
/// is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Content of the seed message
    pub greeting: String,
}

impl ChatConfig {
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}
