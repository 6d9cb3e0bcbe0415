//! Webhook configuration from TOML (`[webhook]` section)

use crate::webhook::GatewayBuildError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw webhook configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    /// URL every message is POSTed to
    pub endpoint: Option<String>,
    /// Request timeout in seconds (no timeout when unset)
    pub timeout_secs: Option<u64>,
}

impl FileWebhookConfig {
    /// Parse the endpoint, accepting only absolute http(s) URLs
    pub fn endpoint_url(&self) -> Result<Url, GatewayBuildError> {
        let raw = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(GatewayBuildError::MissingEndpoint)?;

        let invalid = |reason: String| GatewayBuildError::InvalidEndpoint {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_endpoint(endpoint: &str) -> FileWebhookConfig {
        FileWebhookConfig {
            endpoint: Some(endpoint.to_string()),
            timeout_secs: None,
        }
    }

    #[test]
    fn test_endpoint_url_accepts_https() {
        let url = with_endpoint(" https://hooks.example.com/webhook/e3d8 ")
            .endpoint_url()
            .unwrap();
        assert_eq!(url.host_str(), Some("hooks.example.com"));
        assert_eq!(url.path(), "/webhook/e3d8");
    }

    #[test]
    fn test_endpoint_url_rejects_relative() {
        let err = with_endpoint("/webhook/abc").endpoint_url().unwrap_err();
        assert!(matches!(err, GatewayBuildError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_endpoint_url_rejects_other_schemes() {
        let err = with_endpoint("file:///tmp/hook").endpoint_url().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'file'"));
    }

    #[test]
    fn test_blank_endpoint_is_missing() {
        assert!(matches!(
            with_endpoint("   ").endpoint_url(),
            Err(GatewayBuildError::MissingEndpoint)
        ));
    }

    #[test]
    fn test_timeout() {
        let config = FileWebhookConfig {
            endpoint: None,
            timeout_secs: Some(15),
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(FileWebhookConfig::default().timeout(), None);
    }
}
