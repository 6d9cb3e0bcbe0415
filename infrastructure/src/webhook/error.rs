//! Errors raised while setting up the webhook client

use thiserror::Error;

/// Failure to construct an [`HttpWebhookGateway`](super::HttpWebhookGateway)
#[derive(Error, Debug)]
pub enum GatewayBuildError {
    #[error("No webhook endpoint configured (set [webhook] endpoint or pass --endpoint)")]
    MissingEndpoint,

    #[error("Invalid webhook endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
