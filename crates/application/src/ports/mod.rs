//! Ports - interfaces the task handlers depend on

pub mod console_port;
pub mod playback_port;
pub mod recognition_port;
pub mod speech_port;
pub mod translation_port;

pub use console_port::ConsolePort;
pub use playback_port::PlaybackPort;
pub use recognition_port::{ListenOptions, RecognitionFailure, SpeechRecognitionPort};
pub use speech_port::{SpeechSynthesisPort, SynthesisResult};
pub use translation_port::TranslationPort;

#[cfg(test)]
pub use console_port::MockConsolePort;
#[cfg(test)]
pub use playback_port::MockPlaybackPort;
#[cfg(test)]
pub use recognition_port::MockSpeechRecognitionPort;
#[cfg(test)]
pub use speech_port::MockSpeechSynthesisPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
