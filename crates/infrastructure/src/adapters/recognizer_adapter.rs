//! Recognizer adapter - microphone capture plus remote transcription
//!
//! Implements `SpeechRecognitionPort` as one pass: record a phrase with
//! `audio_io` (blocking, on a dedicated thread), encode it as WAV, and send
//! it to the speech service for transcription. The microphone is opened per
//! pass and released when the phrase ends. Capture and service failures are
//! folded into the port's three distinct outcomes.

use ai_speech::{AudioData, AudioFormat, OpenAiSpeechProvider, SpeechConfig, SpeechError, SpeechToText};
use application::error::ApplicationError;
use application::ports::{ListenOptions, RecognitionFailure, SpeechRecognitionPort};
use async_trait::async_trait;
use audio_io::{ListenConfig, MicrophoneRecorder};
use tracing::{debug, info, instrument};

use crate::config::ListenSettings;

/// Adapter for speech recognition
#[derive(Debug)]
pub struct RecognizerAdapter {
    stt: OpenAiSpeechProvider,
    settings: ListenSettings,
}

impl RecognizerAdapter {
    /// Create a recognizer adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the speech provider fails to initialize.
    pub fn new(
        speech_config: SpeechConfig,
        settings: ListenSettings,
    ) -> Result<Self, ApplicationError> {
        let stt = OpenAiSpeechProvider::new(speech_config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { stt, settings })
    }

    /// Merge per-call options with the configured tuning
    fn listen_config(&self, options: &ListenOptions) -> ListenConfig {
        ListenConfig {
            calibration: options.calibration,
            silence_after: std::time::Duration::from_millis(self.settings.silence_after_ms),
            max_phrase: options.max_phrase,
            ambient_multiplier: self.settings.ambient_multiplier,
            min_threshold: self.settings.min_threshold,
        }
    }
}

#[async_trait]
impl SpeechRecognitionPort for RecognizerAdapter {
    #[instrument(skip(self), fields(calibration_ms = %options.calibration.as_millis()))]
    async fn recognize(&self, options: ListenOptions) -> Result<String, RecognitionFailure> {
        let listen_config = self.listen_config(&options);

        // Capture blocks for the whole phrase; keep it off the runtime
        let recorded = tokio::task::spawn_blocking(move || {
            let recorder = MicrophoneRecorder::open()?;
            recorder.listen(&listen_config)
        })
        .await
        .map_err(|e| RecognitionFailure::Other(format!("Capture task failed: {e}")))?
        .map_err(|e| RecognitionFailure::Other(e.to_string()))?;

        debug!(duration = ?recorded.duration(), "Phrase captured");

        let wav_bytes = recorded
            .to_wav_bytes()
            .map_err(|e| RecognitionFailure::Other(e.to_string()))?;
        let audio = AudioData::new(wav_bytes, AudioFormat::Wav);

        info!("Recognizing speech...");

        match self.stt.transcribe(audio).await {
            Ok(transcription) => Ok(transcription.text),
            Err(SpeechError::NoSpeechDetected) => Err(RecognitionFailure::Unintelligible),
            Err(e) if e.is_unreachable() => Err(RecognitionFailure::Unreachable(e.to_string())),
            Err(e) => Err(RecognitionFailure::Other(e.to_string())),
        }
    }
}
