pub const DEFAULT_LANGUAGE: &str = "en";

/// Per-request recognition options parsed from the upload form.
/// Immutable once parsed; all flags compose independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionOptions {
    pub language: String,
    pub translate: bool,
    pub emit_subtitles: bool,
    pub speed_up: bool,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            translate: false,
            emit_subtitles: false,
            speed_up: false,
        }
    }
}
