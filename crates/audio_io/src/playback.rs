//! Blocking WAV playback
//!
//! Streams a decoded WAV file to the default output device and blocks the
//! caller until the last sample has been consumed, polling the playback
//! cursor with short sleeps.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleRate, StreamConfig};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::error::AudioError;
use crate::wav::{self, DecodedWav};

/// Interval between playback-cursor polls
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Extra wait after the cursor reaches the end, so the device buffer drains
const DRAIN_TAIL: Duration = Duration::from_millis(100);

/// Player bound to the default output device
pub struct WavPlayer {
    output_device: Device,
}

impl std::fmt::Debug for WavPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WavPlayer").finish_non_exhaustive()
    }
}

impl WavPlayer {
    /// Open the default output device
    ///
    /// # Errors
    ///
    /// Returns an error if no output device exists.
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let output_device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        Ok(Self { output_device })
    }

    /// Play a WAV file, blocking until playback finishes
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, not decodable, or the
    /// output stream cannot be built.
    pub fn play_file(&self, path: &Path) -> Result<(), AudioError> {
        let bytes = std::fs::read(path)?;
        let decoded = wav::decode(&bytes)?;

        info!(
            path = %path.display(),
            duration_secs = decoded.duration_secs(),
            "Playing audio"
        );

        self.play(&decoded)
    }

    /// Stream decoded samples and block until the cursor reaches the end
    fn play(&self, audio: &DecodedWav) -> Result<(), AudioError> {
        if audio.samples.is_empty() {
            return Ok(());
        }

        let config = StreamConfig {
            channels: audio.channels.max(1),
            sample_rate: SampleRate(audio.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let samples = Arc::new(audio.samples.clone());
        let cursor = Arc::new(Mutex::new(0_usize));

        let samples_cb = Arc::clone(&samples);
        let cursor_cb = Arc::clone(&cursor);

        let stream = self
            .output_device
            .build_output_stream(
                &config,
                move |output: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut index = cursor_cb.lock();
                    for slot in output.iter_mut() {
                        if *index < samples_cb.len() {
                            *slot = samples_cb[*index];
                            *index += 1;
                        } else {
                            *slot = 0.0;
                        }
                    }
                },
                |err| error!("Output stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        // Block until every sample has been handed to the device
        loop {
            std::thread::sleep(POLL_INTERVAL);
            if *cursor.lock() >= samples.len() {
                break;
            }
        }
        std::thread::sleep(DRAIN_TAIL);

        debug!("Playback finished");
        Ok(())
    }
}
