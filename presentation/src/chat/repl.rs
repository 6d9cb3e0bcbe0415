//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Readline runs on its own thread so replies can be printed while the user
//! is typing. The thread hands each line to the async loop and waits for the
//! loop to say whether to keep reading.

use crate::config::ReplConfig;
use crate::output::bubble::BubbleFormatter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, ExternalPrinter, Result as RlResult};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::thread;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;
use webchat_application::{TranscriptController, UiEvent, WebhookGateway};

const PROMPT: &str = "> ";

type Printer = Box<dyn ExternalPrinter + Send>;

/// What the readline thread reports
enum ReplInput {
    Line(String),
    Interrupted,
    Eof,
    Failed(ReadlineError),
}

/// Result of handling one line
#[derive(Debug, PartialEq, Eq)]
enum LineAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl<G: WebhookGateway + 'static> {
    controller: TranscriptController<G>,
    events: mpsc::UnboundedReceiver<UiEvent>,
    formatter: BubbleFormatter,
    config: ReplConfig,
}

impl<G: WebhookGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    ///
    /// `events` must be the receiving end of the channel passed to the
    /// controller's `with_ui_events`.
    pub fn new(
        controller: TranscriptController<G>,
        events: mpsc::UnboundedReceiver<UiEvent>,
        formatter: BubbleFormatter,
    ) -> Self {
        Self {
            controller,
            events,
            formatter,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `/quit` or end of input
    ///
    /// In-flight deliveries are abandoned on exit.
    pub async fn run(mut self) -> RlResult<()> {
        self.print_welcome();
        for bubble in self.formatter.format_transcript(&self.controller.transcript()) {
            println!("{}", bubble);
        }

        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        let (ack_tx, ack_rx) = std_mpsc::channel();
        let (printer_tx, printer_rx) = oneshot::channel();
        let reader = spawn_reader(self.config.history_file.clone(), input_tx, ack_rx, printer_tx);

        let mut printer = printer_rx.await.ok().flatten();
        let mut reader_parked = false;
        let mut result = Ok(());

        loop {
            tokio::select! {
                input = input_rx.recv() => {
                    let Some(input) = input else { break };
                    match input {
                        ReplInput::Line(line) => {
                            let action = self.handle_line(&line, &mut printer);
                            let _ = ack_tx.send(action == LineAction::Continue);
                            if action == LineAction::Exit {
                                reader_parked = true;
                                break;
                            }
                        }
                        ReplInput::Interrupted => {
                            emit(&mut printer, "^C".to_string());
                            let _ = ack_tx.send(true);
                        }
                        ReplInput::Eof => {
                            println!("Bye!");
                            reader_parked = true;
                            break;
                        }
                        ReplInput::Failed(err) => {
                            eprintln!("Error: {:?}", err);
                            reader_parked = true;
                            result = Err(err);
                            break;
                        }
                    }
                }
                Some(event) = self.events.recv() => self.render_event(event, &mut printer),
            }
        }

        self.controller.shutdown().await;
        drop(ack_tx);

        // The reader saves history on its way out; only wait if it is not blocked in readline
        if reader_parked {
            let _ = tokio::task::spawn_blocking(move || reader.join()).await;
        }

        result
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                Webhook Chat                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if let Some(endpoint) = &self.config.endpoint_label {
            println!("Endpoint: {}", endpoint);
            println!();
        }
        println!("Type a message and press Enter. Commands:");
        println!("  /help        - Show this help");
        println!("  /quit        - Exit chat");
        println!("Lines starting with / are commands and are not sent.");
        println!();
    }

    fn handle_line(&mut self, line: &str, printer: &mut Option<Printer>) -> LineAction {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return self.handle_command(trimmed, printer);
        }

        // The controller decides whether the line is worth sending
        self.controller.update_draft(line);
        if self.controller.submit().is_none() {
            debug!("Blank line ignored");
        }
        LineAction::Continue
    }

    /// Handle slash commands
    fn handle_command(&self, cmd: &str, printer: &mut Option<Printer>) -> LineAction {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                emit(printer, "Bye!".to_string());
                LineAction::Exit
            }
            "/help" | "/h" | "/?" => {
                emit(
                    printer,
                    [
                        "Commands:",
                        "  /help, /h, /?     - Show this help",
                        "  /transcript, /t   - Show the whole conversation",
                        "  /pending          - Show how many replies are outstanding",
                        "  /quit, /exit, /q  - Exit chat",
                        "",
                        "Lines starting with / are always read as commands and never sent.",
                    ]
                    .join("\n"),
                );
                LineAction::Continue
            }
            "/transcript" | "/t" => {
                let bubbles = self
                    .formatter
                    .format_transcript(&self.controller.transcript());
                emit(printer, bubbles.join("\n"));
                LineAction::Continue
            }
            "/pending" => {
                let text = pending_text(self.controller.in_flight());
                emit(printer, self.formatter.format_notice(&text));
                LineAction::Continue
            }
            _ => {
                emit(
                    printer,
                    format!("Unknown command: {}\nType /help for available commands", cmd),
                );
                LineAction::Continue
            }
        }
    }

    fn render_event(&self, event: UiEvent, printer: &mut Option<Printer>) {
        match event {
            UiEvent::MessageAppended(message) => {
                emit(printer, self.formatter.format_message(&message));
            }
            UiEvent::DeliveryFinished { sent_id, ok } => {
                debug!("Delivery for {} finished (ok: {})", sent_id, ok);
            }
        }
    }
}

fn pending_text(count: usize) -> String {
    match count {
        0 => "No replies outstanding".to_string(),
        1 => "1 reply outstanding".to_string(),
        n => format!("{} replies outstanding", n),
    }
}

/// Print above the prompt when possible, plain stdout otherwise
fn emit(printer: &mut Option<Printer>, text: String) {
    match printer {
        Some(p) => {
            if let Err(e) = p.print(text.clone()) {
                debug!("External printer failed: {}", e);
                println!("{}", text);
            }
        }
        None => println!("{}", text),
    }
}

/// Run readline on a dedicated thread
///
/// After every line or interrupt the thread waits on `ack_rx`: `true` reads
/// the next line, `false` or a closed channel ends the thread.
fn spawn_reader(
    history_path: Option<PathBuf>,
    input_tx: mpsc::UnboundedSender<ReplInput>,
    ack_rx: std_mpsc::Receiver<bool>,
    printer_tx: oneshot::Sender<Option<Printer>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                let _ = printer_tx.send(None);
                let _ = input_tx.send(ReplInput::Failed(err));
                return;
            }
        };

        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let printer = rl
            .create_external_printer()
            .ok()
            .map(|p| Box::new(p) as Printer);
        let _ = printer_tx.send(printer);

        loop {
            let input = match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    ReplInput::Line(line)
                }
                Err(ReadlineError::Interrupted) => ReplInput::Interrupted,
                Err(ReadlineError::Eof) => {
                    let _ = input_tx.send(ReplInput::Eof);
                    break;
                }
                Err(err) => {
                    let _ = input_tx.send(ReplInput::Failed(err));
                    break;
                }
            };

            if input_tx.send(input).is_err() {
                break;
            }
            if !matches!(ack_rx.recv(), Ok(true)) {
                break;
            }
        }

        if let Some(path) = &history_path {
            let _ = rl.save_history(path);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use webchat_application::{ChatConfig, DeliveryError};
    use webchat_domain::{Sender, WebhookReply};

    /// Records every delivered text and answers with a fixed reply
    struct RecordingGateway {
        received: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WebhookGateway for RecordingGateway {
        async fn deliver(&self, text: &str) -> Result<WebhookReply, DeliveryError> {
            self.received.lock().unwrap().push(text.to_string());
            Ok(WebhookReply::new("r1", "ok"))
        }
    }

    fn repl() -> (ChatRepl<RecordingGateway>, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway {
            received: Mutex::new(Vec::new()),
        });
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = TranscriptController::new(gateway.clone(), &ChatConfig::default())
            .with_ui_events(tx);
        let formatter = BubbleFormatter::new(&OutputConfig {
            color: false,
            ..OutputConfig::default()
        });
        (ChatRepl::new(controller, rx, formatter), gateway)
    }

    #[tokio::test]
    async fn test_plain_line_is_submitted() {
        let (mut repl, gateway) = repl();

        assert_eq!(repl.handle_line("  Hello  ", &mut None), LineAction::Continue);
        repl.controller.wait_idle().await;

        let transcript = repl.controller.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].sender, Sender::Sent);
        assert_eq!(transcript[1].content, "Hello");
        assert_eq!(*gateway.received.lock().unwrap(), vec!["Hello".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_line_is_not_submitted() {
        let (mut repl, gateway) = repl();

        assert_eq!(repl.handle_line("   ", &mut None), LineAction::Continue);
        repl.controller.wait_idle().await;

        assert_eq!(repl.controller.transcript().len(), 1);
        assert!(gateway.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quit_aliases_exit() {
        let (mut repl, _gateway) = repl();

        for cmd in ["/quit", "/exit", "/q", "  /q  "] {
            assert_eq!(repl.handle_line(cmd, &mut None), LineAction::Exit);
        }
        assert_eq!(repl.controller.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_commands_are_never_sent() {
        let (mut repl, gateway) = repl();

        for cmd in ["/help", "/transcript", "/t", "/pending", "/unknown thing"] {
            assert_eq!(repl.handle_line(cmd, &mut None), LineAction::Continue);
        }
        repl.controller.wait_idle().await;

        assert_eq!(repl.controller.transcript().len(), 1);
        assert!(gateway.received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_pending_text() {
        assert_eq!(pending_text(0), "No replies outstanding");
        assert_eq!(pending_text(1), "1 reply outstanding");
        assert_eq!(pending_text(3), "3 replies outstanding");
    }
}
