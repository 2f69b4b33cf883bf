//! LibreTranslate text-translation integration
//!
//! Client for a LibreTranslate-compatible translation API
//! (<https://libretranslate.com>). Translates text between languages and
//! detects the language of a text; source language may be given as `auto`.

pub mod client;
mod models;

pub use client::{
    AUTO_SOURCE, LibreTranslateClient, TranslateConfig, TranslateError, TranslationClient,
};
pub use models::DetectedLanguage;
