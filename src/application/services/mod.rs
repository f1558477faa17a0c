mod transcription_service;

pub use transcription_service::{TranscriptionPipelineError, TranscriptionService};
