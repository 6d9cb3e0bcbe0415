//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and
//! presentation settings by the binary.

mod chat;
mod logging;
mod output;
mod repl;
mod webhook;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use webhook::FileWebhookConfig;

use crate::webhook::GatewayBuildError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("webhook.endpoint is not set")]
    MissingEndpoint,

    #[error("webhook.endpoint '{url}' is invalid: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("webhook.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("chat.greeting is empty; the transcript will start with a blank bubble")]
    EmptyGreeting,

    #[error("output.width cannot be 0")]
    InvalidWidth,
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the chat cannot start.
    Error,
    /// Non-fatal: the chat starts but may not look as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Webhook endpoint settings
    pub webhook: FileWebhookConfig,
    /// Transcript settings
    pub chat: FileChatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match self.webhook.endpoint_url() {
            Ok(_) => {}
            Err(GatewayBuildError::MissingEndpoint) => {
                issues.push(ConfigIssue::error(ConfigValidationError::MissingEndpoint));
            }
            Err(GatewayBuildError::InvalidEndpoint { url, reason }) => {
                issues.push(ConfigIssue::error(ConfigValidationError::InvalidEndpoint {
                    url,
                    reason,
                }));
            }
            Err(GatewayBuildError::Client(_)) => {}
        }

        if self.webhook.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidTimeout));
        }

        if self.chat.greeting.trim().is_empty() {
            issues.push(ConfigIssue::warning(ConfigValidationError::EmptyGreeting));
        }

        if self.output.width == 0 {
            issues.push(ConfigIssue::warning(ConfigValidationError::InvalidWidth));
        }

        issues
    }
}
