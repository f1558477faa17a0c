use std::path::Path;

use async_trait::async_trait;

/// Converts an arbitrary input container to the normalized waveform the
/// recognizer expects (mono, 16 kHz, s16le PCM), overwriting any file
/// already at `output`. `truncate_seconds == 0` means no truncation.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        truncate_seconds: u32,
    ) -> Result<(), TranscodeError>;
}

/// Terminal for the request; transcoding failures are deterministic given
/// the same input, so nothing retries them.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("transcoder failed to launch: {0}")]
    Launch(String),
    #[error("transcoding failed: {0}")]
    Failed(String),
}
