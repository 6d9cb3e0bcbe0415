//! Webhook wire format.
//!
//! - [`wire::OutboundMessage`]: request body posted for every submission
//! - [`wire::WebhookReply`]: validated reply body

pub mod wire;
