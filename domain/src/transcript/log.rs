//! Append-only transcript

use super::entities::ChatMessage;

/// Ordered list of chat messages (Entity)
///
/// Insertion order is both chronological order and render order. Entries are
/// never edited, removed or reordered once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Start a transcript with its seed message
    pub fn new(seed: ChatMessage) -> Self {
        Self {
            messages: vec![seed],
        }
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: a transcript holds at least its seed
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::entities::{MessageId, Sender};

    #[test]
    fn test_new_holds_only_seed() {
        let transcript = Transcript::new(ChatMessage::seed("Hi"));
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert_eq!(transcript.messages()[0].sender, Sender::Received);
    }

    #[test]
    fn test_append_preserves_prior_entries() {
        let mut transcript = Transcript::new(ChatMessage::seed("Hi"));
        let before = transcript.messages().to_vec();

        transcript.append(ChatMessage::sent("Hello"));
        transcript.append(ChatMessage::new(
            MessageId::new("r1"),
            "Hi there",
            Sender::Received,
        ));

        assert_eq!(transcript.len(), 3);
        assert_eq!(&transcript.messages()[..1], &before[..]);
        assert_eq!(transcript.messages()[1].content, "Hello");
        assert_eq!(transcript.messages().last().unwrap().id.as_str(), "r1");
    }
}
