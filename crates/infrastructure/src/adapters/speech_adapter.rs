//! Speech synthesis adapter - Implements SpeechSynthesisPort using ai_speech

use ai_speech::{OpenAiSpeechProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::{SpeechSynthesisPort, SynthesisResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the text-to-speech service
#[derive(Debug)]
pub struct SpeechSynthesisAdapter {
    provider: OpenAiSpeechProvider,
}

impl SpeechSynthesisAdapter {
    /// Create a new synthesis adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = OpenAiSpeechProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { provider })
    }

    /// Map a speech error to an application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            e @ (SpeechError::ConnectionFailed(_) | SpeechError::Timeout(_)) => {
                ApplicationError::ExternalService(format!("Speech service unreachable: {e}"))
            },
            SpeechError::RateLimited => {
                ApplicationError::ExternalService("Speech service rate limit exceeded".to_string())
            },
            SpeechError::InvalidResponse(e) => {
                ApplicationError::Internal(format!("Invalid speech response: {e}"))
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for SpeechSynthesisAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language))]
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text, &language)
            .await
            .map_err(Self::map_error)?;

        let file_extension = audio.format().extension().to_string();

        debug!(
            audio_size = audio.size_bytes(),
            extension = %file_extension,
            "Synthesis complete"
        );

        Ok(SynthesisResult {
            audio_data: audio.into_data(),
            file_extension,
        })
    }
}
