//! CLI entrypoint for webchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use webchat_application::{ConversationLogger, TranscriptController};
use webchat_infrastructure::{
    ConfigLoader, FileConfig, HttpWebhookGateway, JsonlConversationLogger,
};
use webchat_presentation::{BubbleFormatter, ChatRepl, Cli, OutputConfig, ReplConfig, run_once};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting webchat");

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("Config: {}", issue.error);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.error.to_string())
        .collect();
    if !errors.is_empty() {
        bail!(
            "Invalid configuration:\n  {}\nSet webhook.endpoint in webchat.toml or pass --endpoint <URL>.",
            errors.join("\n  ")
        );
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpWebhookGateway::from_config(&config.webhook)
            .context("Failed to create webhook client")?,
    );
    let endpoint_label = gateway.endpoint().to_string();
    info!("Delivering messages to {}", endpoint_label);

    let shutdown = CancellationToken::new();
    let mut controller =
        TranscriptController::new(gateway, &config.chat.to_chat_config()).with_cancellation(&shutdown);

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Recording conversation to {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                controller = controller.with_conversation_logger(logger);
            }
            None => warn!("Conversation log disabled: cannot open {}", path.display()),
        }
    }

    let formatter = BubbleFormatter::new(&output_config(&config));

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });

        run_once(&mut controller, message, &formatter, !cli.quiet).await;
        controller.shutdown().await;
        return Ok(());
    }

    // Chat mode
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = controller.with_ui_events(tx);
    let repl = ChatRepl::new(controller, rx, formatter).with_config(ReplConfig {
        history_file: config.repl.history_path(),
        endpoint_label: Some(endpoint_label),
    });

    repl.run().await?;
    shutdown.cancel();

    Ok(())
}

/// Command line flags win over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.webhook.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.webhook.timeout_secs = Some(timeout);
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
}

fn output_config(config: &FileConfig) -> OutputConfig {
    OutputConfig {
        color: config.output.color,
        width: config.output.width,
        assistant_name: config.chat.assistant_name.clone(),
    }
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr unless a log file is configured.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = FileConfig::default();
        config.webhook.endpoint = Some("https://from-file.example.com/hook".to_string());

        let cli = Cli::parse_from([
            "webchat",
            "--endpoint",
            "https://from-cli.example.com/hook",
            "--timeout",
            "5",
            "--no-color",
            "--conversation-log",
            "chat.jsonl",
        ]);
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(
            config.webhook.endpoint.as_deref(),
            Some("https://from-cli.example.com/hook")
        );
        assert_eq!(config.webhook.timeout_secs, Some(5));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some(Path::new("chat.jsonl"))
        );
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let mut config = FileConfig::default();
        config.webhook.endpoint = Some("https://from-file.example.com/hook".to_string());
        config.webhook.timeout_secs = Some(12);

        let cli = Cli::parse_from(["webchat"]);
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(
            config.webhook.endpoint.as_deref(),
            Some("https://from-file.example.com/hook")
        );
        assert_eq!(config.webhook.timeout_secs, Some(12));
        assert!(config.output.color);
    }

    #[test]
    fn test_output_config_uses_assistant_name() {
        let mut config = FileConfig::default();
        config.chat.assistant_name = "Support".to_string();
        config.output.width = 40;

        let output = output_config(&config);
        assert_eq!(output.assistant_name, "Support");
        assert_eq!(output.width, 40);
    }
}
