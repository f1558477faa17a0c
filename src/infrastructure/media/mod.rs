mod ffmpeg_transcoder;
mod whisper_recognizer;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use whisper_recognizer::WhisperRecognizer;
