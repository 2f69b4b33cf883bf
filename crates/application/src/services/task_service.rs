//! Task service - the four interactive tasks
//!
//! Each task is a fixed sequence of port calls: collect input, call the
//! services, print results. Tasks that synthesize speech write the audio to
//! a transient file, play it, and delete it before returning; the file
//! never outlives one task invocation.
//!
//! Error policy follows the original tool: text-to-speech and text
//! translation propagate failures to the caller, while voice translation
//! and speech-to-text catch their own failures, report them, and hand
//! control back to the menu.

use std::{fmt, path::PathBuf, sync::Arc};

use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    ConsolePort, ListenOptions, PlaybackPort, RecognitionFailure, SpeechRecognitionPort,
    SpeechSynthesisPort, SynthesisResult, TranslationPort,
};

/// Fixed base name of the transient file per task
const SPEECH_FILE: &str = "speech";
const TRANSLATED_SPEECH_FILE: &str = "translated_speech";
const VOICE_TRANSLATION_FILE: &str = "voice_translation";

const LANGUAGE_HINT: &str = "Enter language code (e.g. en, hi, te, ta, fr, es): ";

/// Configuration for the task service
#[derive(Debug, Clone)]
pub struct TaskConfig {
    /// Directory transient audio files are written to
    pub output_dir: PathBuf,
    /// Listen tuning for voice translation
    pub voice_listen: ListenOptions,
    /// Listen tuning for dictation (speech-to-text)
    pub dictation_listen: ListenOptions,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            voice_listen: ListenOptions::default(),
            dictation_listen: ListenOptions::dictation(),
        }
    }
}

/// Service running the four interactive tasks
pub struct TaskService {
    translation: Arc<dyn TranslationPort>,
    synthesis: Arc<dyn SpeechSynthesisPort>,
    recognition: Arc<dyn SpeechRecognitionPort>,
    playback: Arc<dyn PlaybackPort>,
    console: Arc<dyn ConsolePort>,
    config: TaskConfig,
}

impl fmt::Debug for TaskService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TaskService {
    /// Create a task service with default configuration
    pub fn new(
        translation: Arc<dyn TranslationPort>,
        synthesis: Arc<dyn SpeechSynthesisPort>,
        recognition: Arc<dyn SpeechRecognitionPort>,
        playback: Arc<dyn PlaybackPort>,
        console: Arc<dyn ConsolePort>,
    ) -> Self {
        Self::with_config(
            translation,
            synthesis,
            recognition,
            playback,
            console,
            TaskConfig::default(),
        )
    }

    /// Create a task service with custom configuration
    pub fn with_config(
        translation: Arc<dyn TranslationPort>,
        synthesis: Arc<dyn SpeechSynthesisPort>,
        recognition: Arc<dyn SpeechRecognitionPort>,
        playback: Arc<dyn PlaybackPort>,
        console: Arc<dyn ConsolePort>,
        config: TaskConfig,
    ) -> Self {
        Self {
            translation,
            synthesis,
            recognition,
            playback,
            console,
            config,
        }
    }

    /// Task 1: synthesize typed text and play it back
    #[instrument(skip(self))]
    pub async fn text_to_speech(&self) -> Result<(), ApplicationError> {
        let text = self.console.prompt("\nEnter text to convert to speech: ")?;
        let language = self.console.prompt(LANGUAGE_HINT)?;

        let synthesis = self.synthesis.synthesize(text, language).await?;

        self.console.say("Playing speech...");
        self.play_transient(SPEECH_FILE, &synthesis).await
    }

    /// Task 2: translate typed text, print it, and speak the translation
    #[instrument(skip(self))]
    pub async fn text_translate(&self) -> Result<(), ApplicationError> {
        self.console.say("\n--- Text translation ---");
        let source = self
            .console
            .prompt("Enter source language code (e.g. en, hi, te, ta, fr, es): ")?;
        let target = self
            .console
            .prompt("Enter target language code (e.g. en, hi, te, ta, fr, es): ")?;
        let text = self.console.prompt("Enter text to translate: ")?;

        let translated = self
            .translation
            .translate(Some(source), target.clone(), text)
            .await?;
        self.console
            .say(&format!("\nTranslated text ({target}): {translated}"));

        let synthesis = self.synthesis.synthesize(translated, target).await?;

        self.console.say("Playing translated speech...");
        self.play_transient(TRANSLATED_SPEECH_FILE, &synthesis).await
    }

    /// Task 3: speak, translate what was heard, and play the translation
    ///
    /// Any failure after recording starts is reported here and absorbed;
    /// the menu keeps running.
    #[instrument(skip(self))]
    pub async fn voice_translate(&self) -> Result<(), ApplicationError> {
        self.console.say("\n--- Voice translation ---");
        self.console
            .say("Speak now (recording stops when you stop talking)...");

        if let Err(e) = self.try_voice_translate().await {
            warn!(error = %e, "Voice translation failed");
            self.console.say(&format!("Error: {e}"));
        }

        Ok(())
    }

    async fn try_voice_translate(&self) -> Result<(), ApplicationError> {
        let heard = self
            .recognition
            .recognize(self.config.voice_listen.clone())
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;
        self.console.say(&format!("You said: {heard}"));

        let target = self.console.prompt(LANGUAGE_HINT)?;

        let translated = self
            .translation
            .translate(None, target.clone(), heard)
            .await?;
        self.console
            .say(&format!("\nTranslated text ({target}): {translated}"));

        let synthesis = self.synthesis.synthesize(translated, target).await?;

        self.console.say("Playing translated speech...");
        self.play_transient(VOICE_TRANSLATION_FILE, &synthesis).await
    }

    /// Task 4: transcribe one spoken phrase, optionally saving it to a file
    ///
    /// The two recognition outcomes get their own messages; everything else
    /// is reported generically. Nothing here crashes the menu.
    #[instrument(skip(self))]
    pub async fn speech_to_text(&self) -> Result<(), ApplicationError> {
        self.console.say("\n--- Speech to text ---");
        self.console
            .say("Speak now (recording stops when you fall silent)...");

        let transcript = match self
            .recognition
            .recognize(self.config.dictation_listen.clone())
            .await
        {
            Ok(text) => text,
            Err(RecognitionFailure::Unintelligible) => {
                self.console.say("Could not understand the audio.");
                return Ok(());
            },
            Err(RecognitionFailure::Unreachable(_)) => {
                self.console
                    .say("Could not reach the speech recognition service.");
                return Ok(());
            },
            Err(RecognitionFailure::Other(reason)) => {
                self.console.say(&format!("Error: {reason}"));
                return Ok(());
            },
        };

        self.console.say(&format!("Transcribed text: {transcript}"));

        if let Err(e) = self.offer_transcript_save(&transcript).await {
            warn!(error = %e, "Saving transcript failed");
            self.console.say(&format!("Error: {e}"));
        }

        Ok(())
    }

    /// Ask whether to save the transcript; only an explicit yes and a
    /// non-empty filename cause a write.
    async fn offer_transcript_save(&self, transcript: &str) -> Result<(), ApplicationError> {
        let answer = self.console.prompt("Save transcript to file? (y/N): ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        let filename = self.console.prompt("Enter filename (e.g. transcript.txt): ")?;
        let filename = filename.trim();
        if filename.is_empty() {
            return Ok(());
        }

        tokio::fs::write(filename, transcript).await?;
        info!(filename = %filename, "Transcript saved");
        self.console.say(&format!("Saved transcript to {filename}"));
        Ok(())
    }

    /// Write the audio to its fixed per-task file, play it, delete it
    ///
    /// The file is removed after the playback attempt no matter how
    /// playback went; a playback error is re-raised afterwards.
    async fn play_transient(
        &self,
        base_name: &str,
        synthesis: &SynthesisResult,
    ) -> Result<(), ApplicationError> {
        let path = self
            .config
            .output_dir
            .join(format!("{base_name}.{}", synthesis.file_extension));

        tokio::fs::write(&path, &synthesis.audio_data).await?;

        let played = self.playback.play(path.clone()).await;
        let removed = tokio::fs::remove_file(&path).await;

        played?;
        removed?;
        Ok(())
    }
}
