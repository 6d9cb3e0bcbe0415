//! HTTP adapter for the [`WebhookGateway`](webchat_application::WebhookGateway) port.

mod error;
mod gateway;

pub use error::GatewayBuildError;
pub use gateway::HttpWebhookGateway;
