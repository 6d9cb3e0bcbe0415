//! Application layer for webhook-chat
//!
//! This crate contains the transcript controller, the port definitions it
//! talks through, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    ui_event::UiEvent,
    webhook_gateway::{DeliveryError, WebhookGateway},
};
pub use use_cases::transcript_controller::TranscriptController;
