//! Translation API models
//!
//! Request and response types for the LibreTranslate wire format.

use serde::{Deserialize, Serialize};

/// Request body for `POST /translate`
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    /// Text to translate
    pub q: &'a str,
    /// Source language code, or `"auto"` for detection
    pub source: &'a str,
    /// Target language code
    pub target: &'a str,
    /// Payload format; always `"text"` here
    pub format: &'a str,
    /// API key, if the instance requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

/// Response body of `POST /translate`
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    /// Detection result, present when source was `"auto"`
    #[serde(rename = "detectedLanguage", default)]
    pub detected_language: Option<DetectedLanguage>,
}

/// Request body for `POST /detect`
#[derive(Debug, Serialize)]
pub struct DetectRequest<'a> {
    /// Text to analyze
    pub q: &'a str,
    /// API key, if the instance requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

/// A detected language with its confidence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectedLanguage {
    /// ISO 639-1 language code (e.g. "en", "hi")
    pub language: String,
    /// Confidence percentage (0.0 - 100.0)
    #[serde(default)]
    pub confidence: f32,
}

/// Error body returned by LibreTranslate on failure
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
}
