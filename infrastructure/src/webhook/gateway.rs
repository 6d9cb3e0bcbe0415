//! reqwest-based webhook gateway

use super::error::GatewayBuildError;
use crate::config::FileWebhookConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;
use webchat_application::{DeliveryError, WebhookGateway};
use webchat_domain::{OutboundMessage, WebhookReply};

const USER_AGENT: &str = concat!("webhook-chat/", env!("CARGO_PKG_VERSION"));

/// Posts messages to the chat webhook over HTTP
///
/// One `deliver` call is one POST. Non-2xx responses are failures and their
/// body is never read.
pub struct HttpWebhookGateway {
    client: Client,
    endpoint: Url,
}

impl HttpWebhookGateway {
    /// Create a gateway without a request timeout
    pub fn new(endpoint: Url) -> Result<Self, GatewayBuildError> {
        Self::with_timeout(endpoint, None)
    }

    /// Create a gateway whose requests fail after `timeout`
    pub fn with_timeout(
        endpoint: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayBuildError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Build from the `[webhook]` config section
    pub fn from_config(config: &FileWebhookConfig) -> Result<Self, GatewayBuildError> {
        let endpoint = config.endpoint_url()?;
        Self::with_timeout(endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> DeliveryError {
    if e.is_timeout() {
        DeliveryError::Timeout
    } else {
        DeliveryError::Transport(e.to_string())
    }
}

#[async_trait]
impl WebhookGateway for HttpWebhookGateway {
    async fn deliver(&self, text: &str) -> Result<WebhookReply, DeliveryError> {
        debug!("POST {} ({} bytes)", self.endpoint, text.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&OutboundMessage::new(text))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Webhook answered {}", status);
            return Err(DeliveryError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(WebhookReply::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    async fn gateway_for(server: &MockServer) -> HttpWebhookGateway {
        let url = Url::parse(&format!("{}/webhook/chat", server.uri())).unwrap();
        HttpWebhookGateway::new(url).unwrap()
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"message": "Hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "messageID": "r1",
                "message": "Hi there",
                "extra": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway_for(&server).await.deliver("Hello").await.unwrap();

        assert_eq!(reply, WebhookReply::new("r1", "Hi there"));
    }

    #[tokio::test]
    async fn test_deliver_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("not json at all"))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway_for(&server).await.deliver("Hello").await.unwrap_err();

        assert_eq!(err, DeliveryError::Status(500));
    }

    #[tokio::test]
    async fn test_deliver_client_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = gateway_for(&server).await.deliver("Hello").await.unwrap_err();

        assert_eq!(err, DeliveryError::Status(404));
    }

    #[tokio::test]
    async fn test_deliver_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hi"})))
            .mount(&server)
            .await;

        let err = gateway_for(&server).await.deliver("Hello").await.unwrap_err();

        assert!(matches!(err, DeliveryError::Reply(_)));
    }

    #[tokio::test]
    async fn test_deliver_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"messageID": "r1", "message": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let gateway =
            HttpWebhookGateway::with_timeout(url, Some(Duration::from_millis(50))).unwrap();
        let err = gateway.deliver("Hello").await.unwrap_err();

        assert_eq!(err, DeliveryError::Timeout);
    }

    #[tokio::test]
    async fn test_deliver_unreachable_endpoint() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        drop(listener);

        let gateway = HttpWebhookGateway::new(url).unwrap();
        let err = gateway.deliver("Hello").await.unwrap_err();

        assert!(matches!(err, DeliveryError::Transport(_)));
        assert!(err.to_string().starts_with("Could not reach the chat service"));
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let config = FileWebhookConfig::default();
        assert!(matches!(
            HttpWebhookGateway::from_config(&config),
            Err(GatewayBuildError::MissingEndpoint)
        ));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = FileWebhookConfig {
            endpoint: Some("https://hooks.example.com/webhook/abc".to_string()),
            timeout_secs: Some(10),
        };
        let gateway = HttpWebhookGateway::from_config(&config).unwrap();
        assert_eq!(
            gateway.endpoint().as_str(),
            "https://hooks.example.com/webhook/abc"
        );
    }
}
