//! Application-level configuration.
//!
//! - [`ChatConfig`]: how a new transcript is set up

pub mod chat_config;

pub use chat_config::ChatConfig;
