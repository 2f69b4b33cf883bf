//! Microphone capture with silence-terminated recording
//!
//! Recording runs in three phases driven by [`SilenceTracker`]: ambient
//! noise calibration, waiting for speech, and recording until the speaker
//! falls silent (or the phrase limit elapses). The call blocks for the
//! whole capture.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat, SampleRate, StreamConfig};
use tracing::{debug, error, info};

use crate::error::AudioError;
use crate::silence::{SilenceTracker, TrackerState};
use crate::wav;

/// Tuning for one listen call
#[derive(Debug, Clone)]
pub struct ListenConfig {
    /// Length of the ambient-noise calibration window
    pub calibration: Duration,
    /// Trailing silence that ends the phrase
    pub silence_after: Duration,
    /// Hard cap on phrase length; `None` records until silence
    pub max_phrase: Option<Duration>,
    /// Threshold = ambient RMS * this factor (floored at `min_threshold`)
    pub ambient_multiplier: f32,
    /// Lower bound for the energy threshold
    pub min_threshold: f32,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            calibration: Duration::from_millis(500),
            silence_after: Duration::from_millis(800),
            max_phrase: None,
            ambient_multiplier: 2.0,
            min_threshold: 0.01,
        }
    }
}

/// A completed capture
#[derive(Debug, Clone)]
pub struct RecordedAudio {
    /// Mono samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl RecordedAudio {
    /// Duration of the capture
    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        #[allow(clippy::cast_precision_loss)]
        let secs = self.samples.len() as f64 / f64::from(self.sample_rate);
        Duration::from_secs_f64(secs)
    }

    /// Encode the capture as 16-bit PCM WAV
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>, AudioError> {
        wav::encode(&self.samples, self.sample_rate)
    }
}

/// Recorder bound to the default input device
pub struct MicrophoneRecorder {
    input_device: Device,
    config: StreamConfig,
    sample_format: SampleFormat,
}

impl std::fmt::Debug for MicrophoneRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MicrophoneRecorder")
            .field("config", &self.config)
            .field("sample_format", &self.sample_format)
            .finish_non_exhaustive()
    }
}

impl MicrophoneRecorder {
    /// Open the default input device
    ///
    /// # Errors
    ///
    /// Returns an error if no input device exists or no usable stream
    /// configuration is found.
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let input_device = host.default_input_device().ok_or(AudioError::NoInputDevice)?;

        let supported_configs: Vec<_> = input_device
            .supported_input_configs()
            .map_err(|e| AudioError::UnsupportedConfig(e.to_string()))?
            .collect();

        let supported_config = supported_configs
            .iter()
            .filter(|c| c.channels() <= 2)
            .find(|c| c.sample_format() == SampleFormat::F32)
            .or_else(|| supported_configs.iter().find(|c| c.channels() <= 2))
            .ok_or_else(|| {
                AudioError::UnsupportedConfig("No supported input configuration".to_string())
            })?;

        // Prefer 16kHz (what speech services expect); fall back to the
        // device minimum.
        let desired = SampleRate(16000);
        let sample_rate = if supported_config.min_sample_rate() <= desired
            && desired <= supported_config.max_sample_rate()
        {
            desired
        } else {
            supported_config.min_sample_rate()
        };

        let config = StreamConfig {
            channels: supported_config.channels().min(1),
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        debug!(
            rate = config.sample_rate.0,
            format = ?supported_config.sample_format(),
            "Opened input device"
        );

        Ok(Self {
            input_device,
            config,
            sample_format: supported_config.sample_format(),
        })
    }

    /// Record one phrase, blocking until silence ends it
    ///
    /// Calibrates against ambient noise first, then waits for speech with
    /// no time bound (matching how a push-to-talk-free dictation flow
    /// behaves), and stops once the speaker has been silent for
    /// `config.silence_after` or the phrase limit is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be built or dies mid-capture.
    pub fn listen(&self, config: &ListenConfig) -> Result<RecordedAudio, AudioError> {
        let (chunk_tx, chunk_rx) = mpsc::channel::<Vec<f32>>();
        let sample_rate = self.config.sample_rate.0;

        let stream = self.build_stream(chunk_tx)?;
        stream
            .play()
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        info!("Listening (calibrating for ambient noise first)");

        let result = Self::collect_phrase(&chunk_rx, sample_rate, config);

        // Dropping the stream stops capture
        drop(stream);

        result
    }

    /// Drain chunks from the stream until the tracker reports completion
    fn collect_phrase(
        chunk_rx: &Receiver<Vec<f32>>,
        sample_rate: u32,
        config: &ListenConfig,
    ) -> Result<RecordedAudio, AudioError> {
        let mut tracker = SilenceTracker::new(sample_rate, config);
        let mut samples = Vec::new();
        let mut announced = false;

        loop {
            let chunk = chunk_rx
                .recv()
                .map_err(|_| AudioError::Stream("Input stream closed".to_string()))?;

            match tracker.advance(&chunk) {
                TrackerState::Calibrating => {},
                TrackerState::AwaitingSpeech => {
                    if !announced {
                        info!(threshold = tracker.threshold(), "Waiting for speech");
                        announced = true;
                    }
                },
                TrackerState::Speaking => {
                    samples.extend_from_slice(&chunk);
                },
                TrackerState::Finished => {
                    samples.extend_from_slice(&chunk);
                    break;
                },
            }
        }

        info!(
            samples = samples.len(),
            rate = sample_rate,
            "Capture complete"
        );

        Ok(RecordedAudio {
            samples,
            sample_rate,
        })
    }

    /// Build an input stream delivering f32 chunks on `chunk_tx`
    fn build_stream(&self, chunk_tx: Sender<Vec<f32>>) -> Result<cpal::Stream, AudioError> {
        match self.sample_format {
            SampleFormat::F32 => self.build_typed_stream::<f32, _>(chunk_tx, |s| s),
            SampleFormat::I16 => {
                self.build_typed_stream::<i16, _>(chunk_tx, |s| f32::from(s) / f32::from(i16::MAX))
            },
            SampleFormat::U16 => self.build_typed_stream::<u16, _>(chunk_tx, |s| {
                (f32::from(s) - 32768.0) / 32767.0
            }),
            other => Err(AudioError::UnsupportedConfig(format!(
                "Unsupported sample format: {other:?}"
            ))),
        }
    }

    fn build_typed_stream<T, F>(
        &self,
        chunk_tx: Sender<Vec<f32>>,
        convert: F,
    ) -> Result<cpal::Stream, AudioError>
    where
        T: cpal::SizedSample + Send + 'static,
        F: Fn(T) -> f32 + Send + 'static,
    {
        self.input_device
            .build_input_stream(
                &self.config,
                move |data: &[T], _: &cpal::InputCallbackInfo| {
                    let chunk: Vec<f32> = data.iter().map(|&s| convert(s)).collect();
                    // Receiver gone means the listen call already returned
                    let _ = chunk_tx.send(chunk);
                },
                |err| error!("Input stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))
    }
}
