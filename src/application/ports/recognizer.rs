use std::path::Path;

use async_trait::async_trait;

use crate::domain::TranscriptionOptions;

/// Runs the speech-recognition engine over a normalized waveform and
/// returns the captured transcript text. When subtitle emission is
/// requested the engine drops an SRT sidecar beside the audio file as a
/// side effect; its presence is not validated here but on retrieval.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(
        &self,
        audio: &Path,
        options: &TranscriptionOptions,
    ) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recognizer failed to launch: {0}")]
    Launch(String),
    #[error("recognition failed: {0}")]
    Failed(String),
}
