/// The on-disk files a transcription job produces or consumes. Each kind
/// maps to a fixed extension so the artifact lifecycle stays centrally
/// auditable instead of being scattered across string formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The uploaded media container, exactly as received.
    RawUpload,
    /// Normalized mono 16 kHz s16le PCM waveform.
    Waveform,
    /// SRT sidecar emitted by the recognizer next to the waveform.
    Subtitles,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::RawUpload => "webm",
            ArtifactKind::Waveform => "wav",
            // The recognizer names the sidecar after the full audio
            // file name, so the srt extension stacks on the wav one.
            ArtifactKind::Subtitles => "wav.srt",
        }
    }
}
