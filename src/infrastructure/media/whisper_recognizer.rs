use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ProcessRunner, RecognitionError, Recognizer};
use crate::domain::TranscriptionOptions;

// whisper.cpp's own compiled-in defaults. Matching values are left off the
// command line to keep invocations minimal; passing them explicitly would
// behave identically.
const ENGINE_DEFAULT_THREADS: u32 = 4;
const ENGINE_DEFAULT_PROCESSORS: u32 = 1;

const MODEL_PREFIX: &str = "ggml-";
const MODEL_EXTENSION: &str = "bin";

/// Recognition adapter shelling out to the whisper.cpp binary. Stdout is
/// the transcript; timestamp annotations are always suppressed so the
/// captured text stays plain (subtitle timing comes from the SRT sidecar
/// when requested).
pub struct WhisperRecognizer {
    runner: Arc<dyn ProcessRunner>,
    binary: PathBuf,
    model_dir: PathBuf,
    model: String,
    threads: u32,
    processors: u32,
}

impl WhisperRecognizer {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        binary: PathBuf,
        model_dir: PathBuf,
        model: String,
        threads: u32,
        processors: u32,
    ) -> Self {
        Self {
            runner,
            binary,
            model_dir,
            model,
            threads,
            processors,
        }
    }

    pub fn model_path(&self) -> PathBuf {
        self.model_dir
            .join(format!("{}{}.{}", MODEL_PREFIX, self.model, MODEL_EXTENSION))
    }

    fn build_args(&self, audio: &Path, options: &TranscriptionOptions) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            self.model_path().display().to_string(),
            "-nt".to_string(),
            "-l".to_string(),
            options.language.clone(),
        ];
        if options.emit_subtitles {
            args.push("-osrt".to_string());
        }
        if options.speed_up {
            args.push("--speed-up".to_string());
        }
        if options.translate {
            args.push("--translate".to_string());
        }
        if self.threads != ENGINE_DEFAULT_THREADS {
            args.push("-t".to_string());
            args.push(self.threads.to_string());
        }
        if self.processors != ENGINE_DEFAULT_PROCESSORS {
            args.push("-p".to_string());
            args.push(self.processors.to_string());
        }
        args.push("-f".to_string());
        args.push(audio.display().to_string());
        args
    }
}

#[async_trait]
impl Recognizer for WhisperRecognizer {
    async fn recognize(
        &self,
        audio: &Path,
        options: &TranscriptionOptions,
    ) -> Result<String, RecognitionError> {
        let args = self.build_args(audio, options);

        tracing::debug!(
            model = %self.model,
            language = %options.language,
            translate = options.translate,
            subtitles = options.emit_subtitles,
            "Starting recognition"
        );

        let result = self
            .runner
            .run(&self.binary, &args, None)
            .await
            .map_err(|e| RecognitionError::Launch(e.to_string()))?;

        if !result.success() {
            return Err(RecognitionError::Failed(format!(
                "whisper exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        Ok(result.stdout)
    }
}
