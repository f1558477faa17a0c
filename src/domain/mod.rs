mod artifact;
mod job_id;
mod transcription_options;

pub use artifact::ArtifactKind;
pub use job_id::JobId;
pub use transcription_options::{DEFAULT_LANGUAGE, TranscriptionOptions};
