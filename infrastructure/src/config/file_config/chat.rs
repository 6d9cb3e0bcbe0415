//! Chat configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};
use webchat_application::ChatConfig;
use webchat_application::config::chat_config::DEFAULT_GREETING;

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Seed message shown before any user interaction
    pub greeting: String,
    /// Label shown on received bubbles
    pub assistant_name: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            assistant_name: "Assistant".to_string(),
        }
    }
}

impl FileChatConfig {
    pub fn to_chat_config(&self) -> ChatConfig {
        ChatConfig::default().with_greeting(self.greeting.clone())
    }
}
