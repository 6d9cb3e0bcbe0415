//! Transcript Controller
//!
//! Owns the draft and the transcript, and turns every non-empty submission
//! into one background delivery to the webhook. Replies and failures are
//! appended to the transcript when the delivery resolves, in completion
//! order.
//!
//! Deliveries are tracked tasks bound to the controller's cancellation
//! token. Once the controller is shut down (or dropped) a delivery that is
//! still in flight is abandoned and never touches the transcript.

use crate::config::ChatConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::ui_event::UiEvent;
use crate::ports::webhook_gateway::WebhookGateway;
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};
use webchat_domain::util::truncate_str;
use webchat_domain::{ChatMessage, Draft, MessageId, Transcript};

/// Max bytes of message text included in log lines
const LOG_PREVIEW_BYTES: usize = 80;

/// State shared between the controller and its delivery tasks
struct DeliveryContext<G: WebhookGateway + 'static> {
    gateway: Arc<G>,
    transcript: Arc<Mutex<Transcript>>,
    cancellation_token: CancellationToken,
    tx: Option<mpsc::UnboundedSender<UiEvent>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: WebhookGateway + 'static> Clone for DeliveryContext<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            transcript: self.transcript.clone(),
            cancellation_token: self.cancellation_token.clone(),
            tx: self.tx.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl<G: WebhookGateway + 'static> DeliveryContext<G> {
    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        // Appends are single pushes, so a poisoned lock still holds a valid list
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: UiEvent) {
        if let Some(tx) = &self.tx {
            // Receiver gone means nobody is rendering; the transcript is still updated
            let _ = tx.send(event);
        }
    }

    /// Append unconditionally (local messages)
    ///
    /// The event is sent while the lock is held so events keep transcript order.
    fn append(&self, message: ChatMessage) {
        let mut transcript = self.lock_transcript();
        transcript.append(message.clone());
        self.emit(UiEvent::MessageAppended(message));
    }

    /// Append unless the controller has been shut down.
    ///
    /// The token is checked under the transcript lock so an append never
    /// lands after `shutdown()` has observed the transcript.
    fn append_if_live(&self, message: ChatMessage) -> bool {
        let mut transcript = self.lock_transcript();
        if self.cancellation_token.is_cancelled() {
            return false;
        }
        transcript.append(message.clone());
        self.emit(UiEvent::MessageAppended(message));
        true
    }

    /// One exchange with the webhook, resolved into exactly one transcript entry
    async fn run(self, sent_id: MessageId, text: String) -> Option<ChatMessage> {
        let result = tokio::select! {
            biased;
            _ = self.cancellation_token.cancelled() => {
                debug!("Delivery for {} cancelled while in flight", sent_id);
                return None;
            }
            result = self.gateway.deliver(&text) => result,
        };

        let (message, ok) = match result {
            Ok(reply) => {
                info!("Reply {} received for {}", reply.message_id(), sent_id);
                self.conversation_logger.log(ConversationEvent::new(
                    "reply_received",
                    json!({
                        "in_reply_to": sent_id.as_str(),
                        "id": reply.message_id().as_str(),
                        "content": reply.message(),
                    }),
                ));
                (reply.into_message(), true)
            }
            Err(e) => {
                warn!("Delivery for {} failed: {}", sent_id, e);
                self.conversation_logger.log(ConversationEvent::new(
                    "delivery_failed",
                    json!({
                        "in_reply_to": sent_id.as_str(),
                        "error": e.to_string(),
                    }),
                ));
                (ChatMessage::received(e.to_string()), false)
            }
        };

        if !self.append_if_live(message.clone()) {
            debug!("Discarding result for {}: controller shut down", sent_id);
            return None;
        }
        self.emit(UiEvent::DeliveryFinished { sent_id, ok });
        Some(message)
    }
}

/// Controller for one chat session
///
/// Every method that starts a delivery must be called from within a Tokio
/// runtime.
pub struct TranscriptController<G: WebhookGateway + 'static> {
    context: DeliveryContext<G>,
    draft: Draft,
    tasks: TaskTracker,
}

impl<G: WebhookGateway + 'static> TranscriptController<G> {
    /// Create a controller whose transcript holds only the greeting
    pub fn new(gateway: Arc<G>, config: &ChatConfig) -> Self {
        Self {
            context: DeliveryContext {
                gateway,
                transcript: Arc::new(Mutex::new(Transcript::new(ChatMessage::seed(
                    config.greeting.clone(),
                )))),
                cancellation_token: CancellationToken::new(),
                tx: None,
                conversation_logger: Arc::new(NoConversationLogger),
            },
            draft: Draft::new(),
            tasks: TaskTracker::new(),
        }
    }

    /// Emit [`UiEvent`]s for every transcript change
    pub fn with_ui_events(mut self, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        self.context.tx = Some(tx);
        self
    }

    /// Set a conversation logger for structured event logging.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.context.conversation_logger = logger;
        self
    }

    /// Tie in-flight deliveries to an outer cancellation token
    ///
    /// Cancelling `token` stops all deliveries; shutting the controller down
    /// does not cancel `token` itself.
    pub fn with_cancellation(mut self, token: &CancellationToken) -> Self {
        self.context.cancellation_token = token.child_token();
        self
    }

    /// Replace the draft unconditionally
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    /// Submit the draft
    ///
    /// A draft that is empty after trimming is left alone and nothing
    /// happens. Otherwise the trimmed text is appended as a sent message,
    /// the draft is cleared and one delivery is started in the background.
    /// Returns the appended message.
    ///
    /// After shutdown nothing can be delivered, so the draft and transcript
    /// are left untouched and `None` is returned.
    pub fn submit(&mut self) -> Option<ChatMessage> {
        if self.is_shut_down() {
            debug!("Ignoring submission: controller shut down");
            return None;
        }

        let Some(text) = self.draft.submittable().map(str::to_owned) else {
            debug!("Ignoring empty submission");
            return None;
        };

        let message = ChatMessage::sent(text.clone());
        debug!(
            "Submitting {}: {:?}",
            message.id,
            truncate_str(&text, LOG_PREVIEW_BYTES)
        );
        self.context.conversation_logger.log(ConversationEvent::new(
            "message_sent",
            json!({
                "id": message.id.as_str(),
                "content": &text,
            }),
        ));
        self.context.append(message.clone());
        self.draft.clear();

        let delivery = self.context.clone();
        self.tasks.spawn(delivery.run(message.id.clone(), text));

        Some(message)
    }

    /// Deliver `text` and wait for the resulting transcript entry
    ///
    /// This is the exchange `submit()` runs in the background. Calling it
    /// directly appends the reply (or failure notice) but no sent message.
    /// Returns `None` if the controller was shut down before it resolved.
    pub async fn deliver(&self, text: &str) -> Option<ChatMessage> {
        self.context
            .clone()
            .run(MessageId::generate(), text.to_string())
            .await
    }

    /// Snapshot of the transcript in render order
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.context.lock_transcript().messages().to_vec()
    }

    /// Number of background deliveries that have not resolved yet
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait until every delivery started so far has resolved
    pub async fn wait_idle(&self) {
        self.tasks.close();
        self.tasks.wait().await;
        self.tasks.reopen();
    }

    /// Abandon in-flight deliveries and wait for their tasks to exit
    ///
    /// After this returns the transcript no longer changes.
    pub async fn shutdown(&self) {
        if !self.tasks.is_empty() {
            info!("Shutting down with {} delivery(ies) in flight", self.tasks.len());
        }
        self.context.cancellation_token.cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }

    pub fn is_shut_down(&self) -> bool {
        self.context.cancellation_token.is_cancelled()
    }
}

impl<G: WebhookGateway + 'static> Drop for TranscriptController<G> {
    fn drop(&mut self) {
        self.context.cancellation_token.cancel();
    }
}
