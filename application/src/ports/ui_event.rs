//! UI event types emitted by TranscriptController for presentation rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. Events arrive in the order the transcript changed.

use webchat_domain::{ChatMessage, MessageId};

/// Events emitted by TranscriptController
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A message was appended to the transcript (sent, reply or failure notice)
    MessageAppended(ChatMessage),
    /// The delivery started for the sent message `sent_id` has resolved
    DeliveryFinished { sent_id: MessageId, ok: bool },
}
