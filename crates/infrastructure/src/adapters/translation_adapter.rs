//! Translation adapter - Implements TranslationPort using integration_translate

use application::error::ApplicationError;
use application::ports::TranslationPort;
use async_trait::async_trait;
use integration_translate::{
    AUTO_SOURCE, LibreTranslateClient, TranslateConfig, TranslateError, TranslationClient,
};
use tracing::{debug, instrument};

/// Adapter for the translation service
#[derive(Debug)]
pub struct TranslationAdapter {
    client: LibreTranslateClient,
}

impl TranslationAdapter {
    /// Create a new translation adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the client fails to initialize.
    pub fn new(config: TranslateConfig) -> Result<Self, ApplicationError> {
        let client = LibreTranslateClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Map a translation error to an application error
    fn map_error(err: TranslateError) -> ApplicationError {
        match err {
            TranslateError::ConnectionFailed(e) => {
                ApplicationError::ExternalService(format!("Translation service unreachable: {e}"))
            },
            TranslateError::RequestFailed(e) => {
                ApplicationError::ExternalService(format!("Translation failed: {e}"))
            },
            TranslateError::ParseError(e) => {
                ApplicationError::Internal(format!("Invalid translation response: {e}"))
            },
            TranslateError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            TranslateError::RateLimitExceeded => {
                ApplicationError::ExternalService("Translation rate limit exceeded".to_string())
            },
            TranslateError::Timeout(secs) => ApplicationError::ExternalService(format!(
                "Translation service timeout after {secs}s"
            )),
        }
    }
}

#[async_trait]
impl TranslationPort for TranslationAdapter {
    #[instrument(skip(self, text), fields(source = ?source, target = %target, text_len = text.len()))]
    async fn translate(
        &self,
        source: Option<String>,
        target: String,
        text: String,
    ) -> Result<String, ApplicationError> {
        let source = source.as_deref().unwrap_or(AUTO_SOURCE);

        let translated = self
            .client
            .translate(source, &target, &text)
            .await
            .map_err(Self::map_error)?;

        debug!(translated_len = translated.len(), "Translation complete");

        Ok(translated)
    }
}
