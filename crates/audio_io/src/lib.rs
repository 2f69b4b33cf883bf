//! Microphone capture and audio playback
//!
//! Capture side: [`MicrophoneRecorder`] records from the default input
//! device, calibrating against ambient noise first and stopping on trailing
//! silence (or a phrase time limit). Playback side: [`WavPlayer`] streams a
//! WAV file to the default output device and blocks until it finishes.
//!
//! Both sides are blocking by design; callers that live in an async context
//! run them on a blocking thread.

pub mod capture;
pub mod error;
pub mod playback;
pub mod silence;
pub mod wav;

pub use capture::{ListenConfig, MicrophoneRecorder, RecordedAudio};
pub use error::AudioError;
pub use playback::WavPlayer;
pub use silence::{SilenceTracker, TrackerState};
