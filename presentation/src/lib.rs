//! Presentation layer for webhook-chat
//!
//! This crate contains the CLI definition, the bubble formatter, progress
//! display and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, run_once};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::bubble::BubbleFormatter;
pub use progress::spinner::DeliverySpinner;
