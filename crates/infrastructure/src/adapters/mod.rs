//! Adapters implementing the application ports

pub mod console;
pub mod playback_adapter;
pub mod recognizer_adapter;
pub mod speech_adapter;
pub mod translation_adapter;

pub use console::StdConsole;
pub use playback_adapter::PlaybackAdapter;
pub use recognizer_adapter::RecognizerAdapter;
pub use speech_adapter::SpeechSynthesisAdapter;
pub use translation_adapter::TranslationAdapter;
