//! Application configuration
//!
//! Loaded from defaults, an optional `voxlate.toml`, and `VOXLATE_*`
//! environment variables, in that order of precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ai_speech::SpeechConfig;
use application::ports::ListenOptions;
use application::services::TaskConfig;
use integration_translate::TranslateConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Translation service configuration
    #[serde(default)]
    pub translate: TranslateConfig,

    /// Speech service configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Microphone listen tuning
    #[serde(default)]
    pub listen: ListenSettings,

    /// Directory transient audio files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translate: TranslateConfig::default(),
            speech: SpeechConfig::default(),
            listen: ListenSettings::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Microphone listen tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenSettings {
    /// Ambient-noise calibration window for voice translation (ms)
    #[serde(default = "default_calibration_ms")]
    pub calibration_ms: u64,

    /// Ambient-noise calibration window for dictation (ms)
    #[serde(default = "default_dictation_calibration_ms")]
    pub dictation_calibration_ms: u64,

    /// Trailing silence that ends a phrase (ms)
    #[serde(default = "default_silence_after_ms")]
    pub silence_after_ms: u64,

    /// Hard cap on phrase length in seconds; absent means unbounded
    #[serde(default)]
    pub max_phrase_secs: Option<u64>,

    /// Energy threshold = ambient RMS * this factor
    #[serde(default = "default_ambient_multiplier")]
    pub ambient_multiplier: f32,

    /// Lower bound for the energy threshold
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f32,
}

const fn default_calibration_ms() -> u64 {
    500
}

const fn default_dictation_calibration_ms() -> u64 {
    1000
}

const fn default_silence_after_ms() -> u64 {
    800
}

const fn default_ambient_multiplier() -> f32 {
    2.0
}

const fn default_min_threshold() -> f32 {
    0.01
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            calibration_ms: default_calibration_ms(),
            dictation_calibration_ms: default_dictation_calibration_ms(),
            silence_after_ms: default_silence_after_ms(),
            max_phrase_secs: None,
            ambient_multiplier: default_ambient_multiplier(),
            min_threshold: default_min_threshold(),
        }
    }
}

impl ListenSettings {
    /// Listen options for the voice translation task
    #[must_use]
    pub const fn voice_options(&self) -> ListenOptions {
        ListenOptions {
            calibration: Duration::from_millis(self.calibration_ms),
            max_phrase: match self.max_phrase_secs {
                Some(secs) => Some(Duration::from_secs(secs)),
                None => None,
            },
        }
    }

    /// Listen options for the dictation task: longer calibration,
    /// unbounded phrase
    #[must_use]
    pub const fn dictation_options(&self) -> ListenOptions {
        ListenOptions {
            calibration: Duration::from_millis(self.dictation_calibration_ms),
            max_phrase: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing or any
    /// source fails to parse.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file_source = file.map_or_else(
            || config::File::with_name("voxlate").required(false),
            |path| config::File::from(path).required(true),
        );

        let builder = config::Config::builder()
            .add_source(file_source)
            // Override with environment variables (e.g. VOXLATE_SPEECH__API_KEY)
            .add_source(
                config::Environment::with_prefix("VOXLATE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Derive the task service configuration
    #[must_use]
    pub fn task_config(&self) -> TaskConfig {
        TaskConfig {
            output_dir: self.output_dir.clone(),
            voice_listen: self.listen.voice_options(),
            dictation_listen: self.listen.dictation_options(),
        }
    }
}
