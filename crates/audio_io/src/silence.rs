//! Energy-based end-of-phrase detection
//!
//! [`SilenceTracker`] watches a stream of sample chunks and decides when a
//! spoken phrase has ended. It first measures ambient noise for a
//! calibration window and derives an energy threshold from it, then waits
//! for speech to start, and finally reports completion once the trailing
//! silence is long enough (or the phrase time limit is hit).
//!
//! The tracker counts samples rather than wall-clock time, so it is
//! deterministic and independent of callback pacing.

use std::time::Duration;

use tracing::debug;

use crate::capture::ListenConfig;

/// Externally visible tracker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Measuring ambient noise; samples are not part of the phrase
    Calibrating,
    /// Threshold fixed, waiting for the speaker to start
    AwaitingSpeech,
    /// Phrase in progress; chunks belong to the recording
    Speaking,
    /// Phrase complete; no further chunks are needed
    Finished,
}

/// Tracks speech/silence over a stream of sample chunks
#[derive(Debug)]
pub struct SilenceTracker {
    calibration_samples_left: usize,
    ambient_energy_sum: f32,
    ambient_chunks: usize,
    ambient_multiplier: f32,
    min_threshold: f32,
    threshold: f32,
    silence_limit_samples: usize,
    phrase_limit_samples: Option<usize>,
    trailing_silence_samples: usize,
    phrase_samples: usize,
    state: TrackerState,
}

impl SilenceTracker {
    /// Create a tracker for a stream at `sample_rate` Hz
    #[must_use]
    pub fn new(sample_rate: u32, config: &ListenConfig) -> Self {
        let samples_for = |d: Duration| -> usize {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = (d.as_secs_f64() * f64::from(sample_rate)) as usize;
            n
        };

        Self {
            calibration_samples_left: samples_for(config.calibration),
            ambient_energy_sum: 0.0,
            ambient_chunks: 0,
            ambient_multiplier: config.ambient_multiplier,
            min_threshold: config.min_threshold,
            threshold: config.min_threshold,
            silence_limit_samples: samples_for(config.silence_after),
            phrase_limit_samples: config.max_phrase.map(samples_for),
            trailing_silence_samples: 0,
            phrase_samples: 0,
            state: TrackerState::Calibrating,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> TrackerState {
        self.state
    }

    /// Energy threshold separating speech from silence
    ///
    /// Only meaningful once calibration has completed.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed the next chunk of samples and return the state after it
    pub fn advance(&mut self, chunk: &[f32]) -> TrackerState {
        if chunk.is_empty() || self.state == TrackerState::Finished {
            return self.state;
        }

        let energy = rms(chunk);

        match self.state {
            TrackerState::Calibrating => {
                self.ambient_energy_sum += energy;
                self.ambient_chunks += 1;
                self.calibration_samples_left =
                    self.calibration_samples_left.saturating_sub(chunk.len());

                if self.calibration_samples_left == 0 {
                    #[allow(clippy::cast_precision_loss)]
                    let ambient = self.ambient_energy_sum / self.ambient_chunks as f32;
                    self.threshold = (ambient * self.ambient_multiplier).max(self.min_threshold);
                    self.state = TrackerState::AwaitingSpeech;
                    debug!(
                        ambient = ambient,
                        threshold = self.threshold,
                        "Ambient noise calibration complete"
                    );
                }
            },
            TrackerState::AwaitingSpeech => {
                if energy > self.threshold {
                    debug!(energy = energy, "Speech started");
                    self.state = TrackerState::Speaking;
                    self.phrase_samples = chunk.len();
                    self.trailing_silence_samples = 0;
                }
            },
            TrackerState::Speaking => {
                self.phrase_samples += chunk.len();

                if energy > self.threshold {
                    self.trailing_silence_samples = 0;
                } else {
                    self.trailing_silence_samples += chunk.len();
                    if self.trailing_silence_samples >= self.silence_limit_samples {
                        debug!(phrase_samples = self.phrase_samples, "Phrase ended on silence");
                        self.state = TrackerState::Finished;
                    }
                }

                if let Some(limit) = self.phrase_limit_samples {
                    if self.state == TrackerState::Speaking && self.phrase_samples >= limit {
                        debug!("Phrase time limit reached");
                        self.state = TrackerState::Finished;
                    }
                }
            },
            TrackerState::Finished => {},
        }

        self.state
    }
}

/// Root-mean-square energy of a chunk
fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_squares: f32 = samples.iter().map(|&x| x * x).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum_squares / samples.len() as f32;
    mean.sqrt()
}
