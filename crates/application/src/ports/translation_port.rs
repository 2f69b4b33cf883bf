//! Translation port - Interface for text translation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for text translation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate text into `target`
    ///
    /// # Arguments
    /// * `source` - Source language code; `None` asks the service to detect
    /// * `target` - Target language code
    /// * `text` - Text to translate
    ///
    /// # Returns
    /// The translated text.
    async fn translate(
        &self,
        source: Option<String>,
        target: String,
        text: String,
    ) -> Result<String, ApplicationError>;
}
