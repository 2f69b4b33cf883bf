//! Audio capture and playback errors

use thiserror::Error;

/// Errors that can occur during capture or playback
#[derive(Debug, Error)]
pub enum AudioError {
    /// No input device available
    #[error("No audio input device available")]
    NoInputDevice,

    /// No output device available
    #[error("No audio output device available")]
    NoOutputDevice,

    /// No usable stream configuration for the device
    #[error("Unsupported audio configuration: {0}")]
    UnsupportedConfig(String),

    /// The audio stream failed
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// Reading or writing an audio file failed
    #[error("Audio file error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encoding failed
    #[error("WAV encoding failed: {0}")]
    Encode(String),

    /// WAV decoding failed
    #[error("WAV decoding failed: {0}")]
    Decode(String),
}
