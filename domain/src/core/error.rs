//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Reply has an empty messageID")]
    EmptyMessageId,

    #[error("Reply messageID must be a string or an integer, got {0}")]
    InvalidMessageId(String),

    #[error("Malformed webhook reply: {0}")]
    MalformedReply(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_id_display() {
        let error = DomainError::EmptyMessageId;
        assert_eq!(error.to_string(), "Reply has an empty messageID");
    }

    #[test]
    fn test_malformed_reply_display() {
        let error = DomainError::MalformedReply("missing field `message`".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed webhook reply: missing field `message`"
        );
    }
}
