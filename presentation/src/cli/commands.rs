//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for webchat
#[derive(Parser, Debug)]
#[command(name = "webchat")]
#[command(author, version, about = "Chat with a webhook-backed assistant from the terminal")]
#[command(long_about = r#"
webchat sends each message you type to a chat webhook and shows the reply.

Every message is POSTed as {"message": "..."} and the webhook is expected to
answer with {"messageID": "...", "message": "..."}. Failed deliveries show up
in the transcript as an assistant message describing the error.

Configuration files are loaded from (in priority order):
1. WEBCHAT_* environment variables (e.g. WEBCHAT_WEBHOOK__ENDPOINT)
2. --config <path>     Explicit config file
3. ./webchat.toml      Project-level config
4. ~/.config/webhook-chat/config.toml   Global config

Example:
  webchat --endpoint https://hooks.example.com/webhook/abc
  webchat --endpoint https://hooks.example.com/webhook/abc "What are your opening hours?"
"#)]
pub struct Cli {
    /// Send this single message, print the transcript and exit
    pub message: Option<String>,

    /// Webhook URL messages are posted to
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append a JSONL record of every exchange to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::try_parse_from(["webchat", "-e", "https://hooks.example.com/x", "-vv"])
            .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("https://hooks.example.com/x"));
        assert!(cli.message.is_none());
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "webchat",
            "--timeout",
            "20",
            "--no-color",
            "-q",
            "Hello there",
        ])
        .unwrap();
        assert_eq!(cli.message.as_deref(), Some("Hello there"));
        assert_eq!(cli.timeout, Some(20));
        assert!(cli.no_color);
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_config_flags() {
        let cli = Cli::try_parse_from([
            "webchat",
            "--config",
            "custom.toml",
            "--conversation-log",
            "chat.jsonl",
            "--show-config",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.conversation_log, Some(PathBuf::from("chat.jsonl")));
        assert!(cli.show_config);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["webchat", "--timeout", "soon"]).is_err());
    }
}
