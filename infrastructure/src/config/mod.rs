//! Configuration file loading for webhook-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `WEBCHAT_<SECTION>__<KEY>` (e.g. `WEBCHAT_WEBHOOK__ENDPOINT`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./webchat.toml` or `./.webchat.toml`
//! 4. Global: `$XDG_CONFIG_HOME/webhook-chat/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileWebhookConfig, Severity,
};
pub use loader::ConfigLoader;
