//! Infrastructure - binds the leaf crates to the application ports
//!
//! The `adapters` module implements each application port over the
//! corresponding capability crate; `config` loads the program
//! configuration from defaults, an optional TOML file, and `VOXLATE_*`
//! environment variables.

pub mod adapters;
pub mod config;

pub use adapters::{
    PlaybackAdapter, RecognizerAdapter, SpeechSynthesisAdapter, StdConsole, TranslationAdapter,
};
pub use config::{AppConfig, ListenSettings};
