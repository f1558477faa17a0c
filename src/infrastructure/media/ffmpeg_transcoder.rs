use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ProcessRunner, TranscodeError, Transcoder};

const SAMPLE_RATE: u32 = 16_000;

/// Transcoding adapter shelling out to ffmpeg. Output parameters are fixed
/// to what whisper.cpp accepts: mono, 16 kHz, signed 16-bit little-endian
/// PCM.
pub struct FfmpegTranscoder {
    runner: Arc<dyn ProcessRunner>,
    binary: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(runner: Arc<dyn ProcessRunner>, binary: PathBuf) -> Self {
        Self { runner, binary }
    }

    fn build_args(input: &Path, output: &Path, truncate_seconds: u32) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
        ];
        if truncate_seconds > 0 {
            args.push("-t".to_string());
            args.push(truncate_seconds.to_string());
        }
        args.push("-ar".to_string());
        args.push(SAMPLE_RATE.to_string());
        args.push("-ac".to_string());
        args.push("1".to_string());
        args.push("-c:a".to_string());
        args.push("pcm_s16le".to_string());
        args.push(output.display().to_string());
        args
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(
        &self,
        input: &Path,
        output: &Path,
        truncate_seconds: u32,
    ) -> Result<(), TranscodeError> {
        let args = Self::build_args(input, output, truncate_seconds);

        let result = self
            .runner
            .run(&self.binary, &args, None)
            .await
            .map_err(|e| TranscodeError::Launch(e.to_string()))?;

        if !result.success() {
            return Err(TranscodeError::Failed(format!(
                "ffmpeg exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            truncate_seconds,
            "Transcoding completed"
        );

        Ok(())
    }
}
