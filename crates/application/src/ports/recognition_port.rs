//! Speech recognition port - Interface for microphone capture + transcription

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Tuning for one recognition pass
#[derive(Debug, Clone, PartialEq)]
pub struct ListenOptions {
    /// Ambient-noise calibration window before listening starts
    pub calibration: Duration,
    /// Hard cap on phrase length; `None` records until silence
    pub max_phrase: Option<Duration>,
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self {
            calibration: Duration::from_millis(500),
            max_phrase: None,
        }
    }
}

impl ListenOptions {
    /// Options for the dictation flow: a longer calibration window and an
    /// unbounded phrase.
    #[must_use]
    pub const fn dictation() -> Self {
        Self {
            calibration: Duration::from_secs(1),
            max_phrase: None,
        }
    }
}

/// Why a recognition pass produced no text
///
/// The three kinds are user-visible and deliberately distinct: a phrase the
/// service could not make out is not the same as a service that never
/// answered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognitionFailure {
    /// The audio reached the service but yielded no usable text
    #[error("could not understand the audio")]
    Unintelligible,

    /// The recognition service could not be reached
    #[error("could not reach the speech recognition service: {0}")]
    Unreachable(String),

    /// Capture or transcription failed for another reason
    #[error("{0}")]
    Other(String),
}

/// Port for speech recognition
///
/// One call covers the whole pass: calibrate, record until silence,
/// transcribe.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechRecognitionPort: Send + Sync {
    /// Record one phrase from the microphone and transcribe it
    ///
    /// # Returns
    /// The recognized text, or a [`RecognitionFailure`] describing which of
    /// the distinct outcomes occurred.
    async fn recognize(&self, options: ListenOptions) -> Result<String, RecognitionFailure>;
}
