//! Types for speech processing
//!
//! Data structures for audio data, formats, and transcriptions.

use serde::{Deserialize, Serialize};

/// Supported audio formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV format (uncompressed)
    Wav,
    /// MP3 format
    Mp3,
    /// FLAC format (lossless)
    Flac,
    /// OGG container
    Ogg,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
        }
    }

    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }
}

/// Container for audio data with metadata
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Generate a filename with appropriate extension
    #[must_use]
    pub fn filename(&self, base: &str) -> String {
        format!("{}.{}", base, self.format.extension())
    }
}

/// Result of speech-to-text transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Detected language (ISO 639-1 code)
    pub language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a simple transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Set the detected language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Check if transcription is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod audio_format {
        use super::*;

        #[test]
        fn mime_types_are_correct() {
            assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
            assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
            assert_eq!(AudioFormat::Flac.mime_type(), "audio/flac");
            assert_eq!(AudioFormat::Ogg.mime_type(), "audio/ogg");
        }

        #[test]
        fn extensions_are_correct() {
            assert_eq!(AudioFormat::Wav.extension(), "wav");
            assert_eq!(AudioFormat::Mp3.extension(), "mp3");
            assert_eq!(AudioFormat::Flac.extension(), "flac");
            assert_eq!(AudioFormat::Ogg.extension(), "ogg");
        }

        #[test]
        fn serializes_lowercase() {
            let wav = serde_json::to_string(&AudioFormat::Wav).unwrap();
            assert_eq!(wav, "\"wav\"");
        }
    }

    mod audio_data {
        use super::*;

        #[test]
        fn new_creates_audio_data() {
            let data = vec![1, 2, 3, 4];
            let audio = AudioData::new(data.clone(), AudioFormat::Wav);

            assert_eq!(audio.data(), &data);
            assert_eq!(audio.format(), AudioFormat::Wav);
            assert_eq!(audio.size_bytes(), 4);
        }

        #[test]
        fn is_empty_reflects_data() {
            assert!(AudioData::new(vec![], AudioFormat::Wav).is_empty());
            assert!(!AudioData::new(vec![1], AudioFormat::Wav).is_empty());
        }

        #[test]
        fn into_data_consumes_and_returns_bytes() {
            let original = vec![1, 2, 3, 4, 5];
            let audio = AudioData::new(original.clone(), AudioFormat::Mp3);
            assert_eq!(audio.into_data(), original);
        }

        #[test]
        fn filename_includes_extension() {
            let audio = AudioData::new(vec![], AudioFormat::Wav);
            assert_eq!(audio.filename("speech"), "speech.wav");

            let audio = AudioData::new(vec![], AudioFormat::Mp3);
            assert_eq!(audio.filename("speech"), "speech.mp3");
        }

        #[test]
        fn mime_type_delegates_to_format() {
            let audio = AudioData::new(vec![], AudioFormat::Flac);
            assert_eq!(audio.mime_type(), "audio/flac");
        }
    }

    mod transcription {
        use super::*;

        #[test]
        fn new_creates_simple_transcription() {
            let transcription = Transcription::new("Hello, world!");
            assert_eq!(transcription.text, "Hello, world!");
            assert!(transcription.language.is_none());
            assert!(transcription.duration_ms.is_none());
        }

        #[test]
        fn with_language_sets_language() {
            let transcription = Transcription::new("Hallo").with_language("de");
            assert_eq!(transcription.language, Some("de".to_string()));
        }

        #[test]
        fn with_duration_sets_duration() {
            let transcription = Transcription::new("Test").with_duration(3500);
            assert_eq!(transcription.duration_ms, Some(3500));
        }

        #[test]
        fn is_empty_treats_whitespace_as_empty() {
            assert!(Transcription::new("").is_empty());
            assert!(Transcription::new("   \n\t  ").is_empty());
            assert!(!Transcription::new("Hello").is_empty());
        }
    }
}
