//! Domain layer for webhook-chat
//!
//! This crate contains the chat entities and the webhook wire types.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The transcript is the ordered, append-only list of [`ChatMessage`]s shown
//! to the user. It always starts with a single seed message from the
//! assistant and only ever grows.
//!
//! ## Draft
//!
//! The [`Draft`] is the text the user is composing. It is submitted only when
//! it is non-empty after trimming.
//!
//! ## Webhook
//!
//! Every submitted message is posted to a webhook as an [`OutboundMessage`]
//! and answered with a [`WebhookReply`].

pub mod core;
pub mod transcript;
pub mod util;
pub mod webhook;

// Re-export commonly used types
pub use core::error::DomainError;
pub use transcript::{
    draft::Draft,
    entities::{ChatMessage, MessageId, SEED_MESSAGE_ID, Sender},
    log::Transcript,
};
pub use webhook::wire::{OutboundMessage, WebhookReply};
