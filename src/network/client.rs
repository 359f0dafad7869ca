//! HTTP client for calls to the SearXNG instance

use crate::config::UpstreamSettings;
use crate::error::{ProxyError, ProxyResult};
use anyhow::Result;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client wrapper with upstream-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&UpstreamSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &UpstreamSettings) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(settings.pool_max_idle_per_host)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// GET `url` with `params` and decode the JSON body.
    ///
    /// One attempt, bounded by `timeout` from send until the body is read.
    /// Non-2xx statuses become [`ProxyError::UpstreamUnavailable`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        timeout: Duration,
    ) -> ProxyResult<T> {
        let request = self
            .client
            .get(url)
            .query(params)
            .timeout(timeout)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| ProxyError::Internal(format!("Invalid upstream request: {e}")))?;

        debug!("Requesting upstream: {}", request.url());

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Upstream error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            return Err(ProxyError::upstream_status(status));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
        assert!(client.unwrap().user_agent().starts_with("MAYA Search Engine/"));
    }

    #[tokio::test]
    async fn test_get_json_sends_headers_and_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(query_param("q", "rust"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let value: serde_json::Value = client
            .get_json(
                &format!("{}/ping", server.uri()),
                &[("q", "rust".to_string())],
                Duration::from_secs(5),
            )
            .await
            .unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<serde_json::Value>(&server.uri(), &[], Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProxyError::UpstreamUnavailable {
                status: 502,
                reason: "Bad Gateway".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<serde_json::Value>(&server.uri(), &[], Duration::from_millis(100))
            .await
            .unwrap_err();
        assert_eq!(err, ProxyError::RequestTimeout);
    }

    #[tokio::test]
    async fn test_invalid_body_is_internal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<serde_json::Value>(&server.uri(), &[], Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Internal(_)));
    }
}
