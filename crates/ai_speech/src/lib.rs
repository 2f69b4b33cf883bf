//! AI Speech - Speech-to-Text and Text-to-Speech abstractions
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{OpenAiSpeechProvider, SpeechToText, TextToSpeech, AudioData, AudioFormat};
//!
//! let provider = OpenAiSpeechProvider::new(config)?;
//!
//! // Transcribe audio (language auto-detected)
//! let audio = AudioData::new(bytes, AudioFormat::Wav);
//! let transcription = provider.transcribe(audio).await?;
//! println!("Transcribed: {}", transcription.text);
//!
//! // Synthesize speech in a target language
//! let audio = provider.synthesize("Hello, world!", "en").await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::openai::OpenAiSpeechProvider;
pub use types::{AudioData, AudioFormat, Transcription};
