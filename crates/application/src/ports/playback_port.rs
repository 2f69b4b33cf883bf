//! Playback port - Interface for audio file playback

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for audio playback
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaybackPort: Send + Sync {
    /// Play an audio file, returning only once playback has finished
    ///
    /// # Errors
    /// Fails if the file is missing or cannot be played.
    async fn play(&self, path: PathBuf) -> Result<(), ApplicationError>;
}
