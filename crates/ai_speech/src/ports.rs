//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert audio data to text transcriptions.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text, letting the service detect the language
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails. An audio clip the
    /// service cannot make sense of yields `SpeechError::NoSpeechDetected`.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Transcribe audio with a specific language hint
    ///
    /// `language` is an ISO 639-1 code (e.g., "en", "de", "es").
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if transcription fails.
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is available
    async fn is_available(&self) -> bool;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech in the given language
    ///
    /// `language` is the language code the text is written in; it is passed
    /// through to the service unvalidated.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails or the language is rejected
    /// by the service.
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Check if the TTS service is available
    async fn is_available(&self) -> bool;

    /// Get the name of the current TTS model
    fn model_name(&self) -> &str;
}
