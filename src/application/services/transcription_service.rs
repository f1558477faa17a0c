use std::sync::Arc;

use crate::application::ports::{
    ArtifactStore, RecognitionError, Recognizer, TranscodeError, Transcoder,
};
use crate::domain::{ArtifactKind, JobId, TranscriptionOptions};

/// Drives one job through transcode → recognize → cleanup. The upload must
/// already be persisted under `id` when `transcribe` is called; every stage
/// failure is terminal for the job and cleanup stays best-effort.
pub struct TranscriptionService {
    store: Arc<dyn ArtifactStore>,
    transcoder: Arc<dyn Transcoder>,
    recognizer: Arc<dyn Recognizer>,
    truncate_seconds: u32,
}

impl TranscriptionService {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        transcoder: Arc<dyn Transcoder>,
        recognizer: Arc<dyn Recognizer>,
        truncate_seconds: u32,
    ) -> Self {
        Self {
            store,
            transcoder,
            recognizer,
            truncate_seconds,
        }
    }

    pub async fn transcribe(
        &self,
        id: JobId,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionPipelineError> {
        let raw = self.store.path_for(id, ArtifactKind::RawUpload);
        let waveform = self.store.path_for(id, ArtifactKind::Waveform);

        let transcoded = self
            .transcoder
            .transcode(&raw, &waveform, self.truncate_seconds)
            .await;

        // The raw container is disposable once handed to the transcoder,
        // whatever the outcome and whatever the retention flag says.
        self.store.remove(id, ArtifactKind::RawUpload, true).await;

        if let Err(e) = transcoded {
            self.store.remove(id, ArtifactKind::Waveform, true).await;
            return Err(e.into());
        }

        tracing::debug!(job_id = %id, "Waveform ready, starting recognition");

        let recognized = self.recognizer.recognize(&waveform, options).await;

        // Deliverable, so the retention flag applies.
        self.store.remove(id, ArtifactKind::Waveform, false).await;

        let transcript = recognized?;

        tracing::info!(
            job_id = %id,
            chars = transcript.len(),
            "Transcription completed"
        );

        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionPipelineError {
    #[error("transcoding: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("recognition: {0}")]
    Recognition(#[from] RecognitionError),
}
