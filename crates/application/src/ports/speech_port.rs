//! Speech synthesis port - Interface for text-to-speech

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio bytes
    pub audio_data: Vec<u8>,
    /// File extension matching the audio encoding (e.g. "wav")
    pub file_extension: String,
}

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize speech from text
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `language` - Language code the text is written in
    ///
    /// # Returns
    /// Synthesized audio bytes plus the file extension to store them under.
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_synthesis_port() {
        let mut mock = MockSpeechSynthesisPort::new();
        mock.expect_synthesize().returning(|_, _| {
            Ok(SynthesisResult {
                audio_data: vec![1, 2, 3, 4],
                file_extension: "wav".to_string(),
            })
        });

        let result = mock
            .synthesize("Hello".to_string(), "en".to_string())
            .await
            .unwrap();
        assert_eq!(result.audio_data.len(), 4);
        assert_eq!(result.file_extension, "wav");
    }
}
