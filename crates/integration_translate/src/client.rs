//! LibreTranslate client
//!
//! HTTP client for a LibreTranslate-compatible translation API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorResponse, DetectRequest, DetectedLanguage, TranslateRequest, TranslateResponse};

/// Sentinel source language code requesting server-side detection
pub const AUTO_SOURCE: &str = "auto";

/// Translation client errors
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Connection to the translation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the translation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the translation service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Timeout while waiting for the translation service
    #[error("Translation timeout after {0}s")]
    Timeout(u64),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(default_timeout())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Translation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// LibreTranslate API base URL (default: <http://localhost:5000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, if the instance requires one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Translation client trait
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translate text from `source` to `target`
    ///
    /// `source` may be [`AUTO_SOURCE`] to let the service detect the input
    /// language.
    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslateError>;

    /// Detect the language of a text
    async fn detect(&self, text: &str) -> Result<DetectedLanguage, TranslateError>;

    /// Check if the translation service is healthy
    async fn is_healthy(&self) -> bool;
}

/// LibreTranslate HTTP client implementation
#[derive(Debug)]
pub struct LibreTranslateClient {
    client: Client,
    config: TranslateConfig,
}

impl LibreTranslateClient {
    /// Create a new LibreTranslate client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TranslateConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, TranslateError> {
        Self::new(TranslateConfig::default())
    }

    /// Build the URL for an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Map a non-success HTTP response to a `TranslateError`
    async fn error_from_response(response: reqwest::Response) -> TranslateError {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return TranslateError::RateLimitExceeded;
        }
        if status.is_server_error() {
            return TranslateError::ServiceUnavailable(format!("HTTP {status}"));
        }

        // LibreTranslate reports client errors as {"error": "..."}
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_error) => TranslateError::RequestFailed(api_error.error),
            Err(_) => TranslateError::RequestFailed(format!("HTTP {status}: {body}")),
        }
    }
}

#[async_trait]
impl TranslationClient for LibreTranslateClient {
    #[instrument(skip(self, text), fields(source = %source, target = %target, text_len = text.len()))]
    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        debug!("Requesting translation");

        let response = self
            .client
            .post(self.url("/translate"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(e.to_string()))?;

        if let Some(detected) = &body.detected_language {
            debug!(
                language = %detected.language,
                confidence = detected.confidence,
                "Source language detected"
            );
        }

        Ok(body.translated_text)
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect(&self, text: &str) -> Result<DetectedLanguage, TranslateError> {
        let request = DetectRequest {
            q: text,
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.url("/detect"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        // /detect returns candidates ordered by confidence
        let mut candidates: Vec<DetectedLanguage> = response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(e.to_string()))?;

        if candidates.is_empty() {
            return Err(TranslateError::ParseError(
                "No language candidates in response".to_string(),
            ));
        }

        Ok(candidates.remove(0))
    }

    async fn is_healthy(&self) -> bool {
        match self.client.get(self.url("/languages")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Translation service health check failed: {}", e);
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> LibreTranslateClient {
        let config = TranslateConfig {
            base_url: mock_server.uri(),
            ..Default::default()
        };
        LibreTranslateClient::new(config).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = TranslateConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn translate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({
                "q": "hello",
                "source": "en",
                "target": "es",
                "format": "text"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "hola"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.translate("en", "es", "hello").await;

        assert_eq!(result.unwrap(), "hola");
    }

    #[tokio::test]
    async fn translate_auto_source_passes_sentinel() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({"source": "auto"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "hallo",
                "detectedLanguage": {"language": "en", "confidence": 87.0}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.translate(AUTO_SOURCE, "de", "hello").await;

        assert_eq!(result.unwrap(), "hallo");
    }

    #[tokio::test]
    async fn translate_sends_api_key_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({"api_key": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "ciao"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = TranslateConfig {
            base_url: mock_server.uri(),
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let client = LibreTranslateClient::new(config).unwrap();

        let result = client.translate("en", "it", "hello").await;
        assert_eq!(result.unwrap(), "ciao");
    }

    #[tokio::test]
    async fn translate_client_error_reports_api_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "xx is not a supported language"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.translate("en", "xx", "hello").await;

        match result {
            Err(TranslateError::RequestFailed(msg)) => {
                assert!(msg.contains("not a supported language"));
            },
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn translate_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.translate("en", "es", "hello").await;

        assert!(matches!(result, Err(TranslateError::RateLimitExceeded)));
    }

    #[tokio::test]
    async fn translate_server_error_is_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.translate("en", "es", "hello").await;

        assert!(matches!(result, Err(TranslateError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn detect_returns_top_candidate() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"language": "fr", "confidence": 90.0},
                {"language": "es", "confidence": 10.0}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let detected = client.detect("bonjour").await.unwrap();

        assert_eq!(detected.language, "fr");
    }

    #[tokio::test]
    async fn detect_empty_candidates_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.detect("bonjour").await;

        assert!(matches!(result, Err(TranslateError::ParseError(_))));
    }

    #[tokio::test]
    async fn is_healthy_when_languages_endpoint_responds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(client.is_healthy().await);
    }

    #[tokio::test]
    async fn is_not_healthy_on_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/languages"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(!client.is_healthy().await);
    }
}
