mod artifact_store;
mod process_runner;
mod recognizer;
mod transcoder;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use process_runner::{ProcessError, ProcessOutput, ProcessRunner};
pub use recognizer::{RecognitionError, Recognizer};
pub use transcoder::{TranscodeError, Transcoder};
