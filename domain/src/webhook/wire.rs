//! JSON bodies exchanged with the webhook

use crate::core::error::DomainError;
use crate::transcript::entities::{ChatMessage, MessageId, Sender};
use serde::{Deserialize, Serialize};

/// Request body: `{"message": "<text>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub message: String,
}

impl OutboundMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `messageID` as it appears on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMessageId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct RawReply {
    #[serde(rename = "messageID")]
    message_id: RawMessageId,
    message: String,
}

/// A validated webhook reply (Value Object)
///
/// Deserializes from `{"messageID": ..., "message": ...}`. Extra fields are
/// ignored. `messageID` may be a string or an integer but must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReply")]
pub struct WebhookReply {
    #[serde(rename = "messageID")]
    message_id: MessageId,
    message: String,
}

impl WebhookReply {
    pub fn new(message_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message_id: MessageId::new(message_id),
            message: message.into(),
        }
    }

    /// Parse and validate a reply body
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body).map_err(|e| DomainError::MalformedReply(e.to_string()))
    }

    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn the reply into the transcript entry it stands for
    pub fn into_message(self) -> ChatMessage {
        ChatMessage::new(self.message_id, self.message, Sender::Received)
    }
}

impl TryFrom<RawReply> for WebhookReply {
    type Error = DomainError;

    fn try_from(raw: RawReply) -> Result<Self, Self::Error> {
        let id = match raw.message_id {
            RawMessageId::Text(text) => text,
            RawMessageId::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            RawMessageId::Number(n) => return Err(DomainError::InvalidMessageId(n.to_string())),
        };

        if id.trim().is_empty() {
            return Err(DomainError::EmptyMessageId);
        }

        Ok(Self {
            message_id: MessageId::new(id),
            message: raw.message,
        })
    }
}
