use std::sync::Arc;

use crate::application::ports::ArtifactStore;
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

/// Shared handler state. Nothing in here is mutable after startup; requests
/// only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArtifactStore>,
    pub transcription: Arc<TranscriptionService>,
    pub settings: Settings,
}
