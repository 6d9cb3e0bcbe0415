//! Infrastructure layer for webhook-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod webhook;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileWebhookConfig, Severity,
};
pub use logging::JsonlConversationLogger;
pub use webhook::{GatewayBuildError, HttpWebhookGateway};
