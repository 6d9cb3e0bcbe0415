//! Transcript domain entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Id of the greeting message every transcript starts with
pub const SEED_MESSAGE_ID: &str = "initial-message";

/// Who a bubble is attributed to
///
/// Only drives placement and styling: `Sent` bubbles are the user's,
/// `Received` bubbles are the assistant's (replies and failures alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Sent,
    Received,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Sent => "sent",
            Sender::Received => "received",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a chat message (Value Object)
///
/// Locally created messages get a random UUID, so two messages created in the
/// same instant never collide. Reply ids are whatever the webhook returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn seed() -> Self {
        Self(SEED_MESSAGE_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single chat bubble (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn new(id: MessageId, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
        }
    }

    /// The greeting every transcript starts with
    pub fn seed(greeting: impl Into<String>) -> Self {
        Self::new(MessageId::seed(), greeting, Sender::Received)
    }

    /// A message composed by the user, with a freshly generated id
    pub fn sent(content: impl Into<String>) -> Self {
        Self::new(MessageId::generate(), content, Sender::Sent)
    }

    /// An assistant-side message with a freshly generated id
    ///
    /// Used for failure notices, which have no id of their own.
    pub fn received(content: impl Into<String>) -> Self {
        Self::new(MessageId::generate(), content, Sender::Received)
    }
}
