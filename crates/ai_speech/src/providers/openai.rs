//! OpenAI-compatible speech provider
//!
//! Implements `SpeechToText` against `/audio/transcriptions` and
//! `TextToSpeech` against `/audio/speech`. Works with the OpenAI API and
//! with self-hosted servers exposing the same surface.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioData, Transcription};

/// OpenAI-compatible speech provider implementing both STT and TTS
#[derive(Debug, Clone)]
pub struct OpenAiSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAiSpeechProvider {
    /// Create a new speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the STT endpoint URL
    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url)
    }

    /// Shared connectivity check against the models endpoint
    async fn check_available(&self) -> bool {
        let models_url = format!("{}/models", self.config.base_url);

        match self
            .client
            .get(&models_url)
            .bearer_auth(self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Speech service availability check failed: {}", e);
                false
            },
        }
    }

    /// Upload audio for transcription, with an optional language hint
    async fn request_transcription(
        &self,
        audio: AudioData,
        language: Option<&str>,
    ) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let filename = audio.filename("audio");
        let mime_type = audio.mime_type();
        let data = audio.into_data();

        let file_part = Part::bytes(data)
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.config.stt_model.clone());

        if let Some(lang) = language {
            form = form.text("language", lang.to_string());
        }

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    Some("model_not_found") => Err(SpeechError::ModelNotAvailable(
                        self.config.stt_model.clone(),
                    )),
                    _ => Err(SpeechError::TranscriptionFailed(api_error.error.message)),
                };
            }

            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let whisper_response: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let mut transcription = Transcription::new(whisper_response.text);

        // Audio the model found nothing intelligible in comes back blank
        if transcription.is_empty() {
            return Err(SpeechError::NoSpeechDetected);
        }

        match language {
            Some(lang) => transcription = transcription.with_language(lang),
            None => {
                if let Some(lang) = whisper_response.language {
                    transcription = transcription.with_language(lang);
                }
            },
        }

        if let Some(duration) = whisper_response.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }
}

/// Whisper transcription response
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

#[async_trait]
impl SpeechToText for OpenAiSpeechProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), format = ?audio.format()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio, language auto-detected");
        let transcription = self.request_transcription(audio, None).await?;

        debug!(
            text_len = transcription.text.len(),
            language = ?transcription.language,
            "Transcription complete"
        );

        Ok(transcription)
    }

    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), language = %language))]
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio with language hint: {}", language);
        self.request_transcription(audio, Some(language)).await
    }

    async fn is_available(&self) -> bool {
        self.check_available().await
    }

    fn model_name(&self) -> &str {
        &self.config.stt_model
    }
}

#[async_trait]
impl TextToSpeech for OpenAiSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech");

        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        // The speech endpoint rejects inputs over 4096 characters
        if text.len() > 4096 {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {} characters exceeds 4096 limit",
                text.len()
            )));
        }

        let request = TtsRequest {
            model: &self.config.tts_model,
            input: text,
            voice: &self.config.voice,
            language,
            response_format: Some(self.config.output_format.extension()),
            speed: if (self.config.speed - 1.0).abs() < f32::EPSILON {
                None
            } else {
                Some(self.config.speed)
            },
        };

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    Some("model_not_found") => Err(SpeechError::ModelNotAvailable(
                        self.config.tts_model.clone(),
                    )),
                    _ => Err(SpeechError::SynthesisFailed(api_error.error.message)),
                };
            }

            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(
            audio_bytes.to_vec(),
            self.config.output_format,
        ))
    }

    async fn is_available(&self) -> bool {
        self.check_available().await
    }

    fn model_name(&self) -> &str {
        &self.config.tts_model
    }
}
