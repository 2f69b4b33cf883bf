//! Playback adapter - Implements PlaybackPort using audio_io
//!
//! The output device is opened per call and released when the clip ends,
//! so a missing speaker only fails the task that actually plays audio.

use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::PlaybackPort;
use async_trait::async_trait;
use audio_io::WavPlayer;
use tracing::instrument;

/// Adapter for audio playback
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaybackAdapter;

impl PlaybackAdapter {
    /// Create a playback adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlaybackPort for PlaybackAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn play(&self, path: PathBuf) -> Result<(), ApplicationError> {
        // Playback blocks until the clip finishes; keep it off the runtime
        tokio::task::spawn_blocking(move || {
            let player = WavPlayer::open()?;
            player.play_file(&path)
        })
        .await
        .map_err(|e| ApplicationError::Internal(format!("Playback task failed: {e}")))?
        .map_err(|e| ApplicationError::Audio(e.to_string()))
    }
}
