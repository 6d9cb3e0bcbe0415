//! Single-message mode: send, wait for the reply, print the transcript

use crate::output::bubble::BubbleFormatter;
use crate::progress::spinner::DeliverySpinner;
use tracing::warn;
use webchat_application::{TranscriptController, WebhookGateway};
use webchat_domain::ChatMessage;

/// Submit `message`, wait for its delivery and print the whole transcript
///
/// A failed delivery is part of the returned transcript, not an error.
pub async fn run_once<G: WebhookGateway + 'static>(
    controller: &mut TranscriptController<G>,
    message: &str,
    formatter: &BubbleFormatter,
    show_progress: bool,
) -> Vec<ChatMessage> {
    controller.update_draft(message);

    if controller.submit().is_some() {
        let spinner = DeliverySpinner::new("Waiting for reply...", show_progress);
        controller.wait_idle().await;
        spinner.finish();
    } else {
        warn!("Nothing to send: message is blank");
    }

    let transcript = controller.transcript();
    for bubble in formatter.format_transcript(&transcript) {
        println!("{}", bubble);
    }
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use webchat_application::{ChatConfig, DeliveryError};
    use webchat_domain::{Sender, WebhookReply};

    struct EchoGateway;

    #[async_trait]
    impl WebhookGateway for EchoGateway {
        async fn deliver(&self, text: &str) -> Result<WebhookReply, DeliveryError> {
            Ok(WebhookReply::new("echo-1", format!("You said: {}", text)))
        }
    }

    #[tokio::test]
    async fn test_run_once_waits_for_reply() {
        let mut controller = TranscriptController::new(Arc::new(EchoGateway), &ChatConfig::default());

        let transcript =
            run_once(&mut controller, " ping ", &BubbleFormatter::default(), false).await;

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].content, "ping");
        assert_eq!(transcript[2].content, "You said: ping");
        assert_eq!(transcript[2].sender, Sender::Received);
    }

    #[tokio::test]
    async fn test_run_once_blank_message_sends_nothing() {
        let mut controller = TranscriptController::new(Arc::new(EchoGateway), &ChatConfig::default());

        let transcript = run_once(&mut controller, "   ", &BubbleFormatter::default(), false).await;

        assert_eq!(transcript.len(), 1);
        assert_eq!(controller.draft(), "   ");
    }
}
