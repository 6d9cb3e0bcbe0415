//! Webhook gateway port
//!
//! Defines the interface for posting a message to the remote webhook.

use async_trait::async_trait;
use thiserror::Error;
use webchat_domain::{DomainError, WebhookReply};

/// Errors that can occur while delivering a message
///
/// The `Display` text of each variant is what ends up in the transcript when
/// a delivery fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Could not reach the chat service: {0}")]
    Transport(String),

    #[error("The chat service did not answer in time")]
    Timeout,

    #[error("The chat service responded with HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Reply(#[from] DomainError),
}

/// Gateway to the chat webhook
///
/// One call is one request/response exchange. Implementations must not
/// retry; a failed exchange is reported once through [`DeliveryError`].
#[async_trait]
pub trait WebhookGateway: Send + Sync {
    /// Post `text` and return the validated reply
    async fn deliver(&self, text: &str) -> Result<WebhookReply, DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        assert_eq!(
            DeliveryError::Status(500).to_string(),
            "The chat service responded with HTTP 500"
        );
    }

    #[test]
    fn test_reply_error_is_transparent() {
        let error: DeliveryError = DomainError::EmptyMessageId.into();
        assert_eq!(error.to_string(), "Reply has an empty messageID");
    }
}
