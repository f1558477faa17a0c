use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Captured result of one external-process invocation.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the process, `None` when terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Narrow seam over "shell out to a binary and wait for it". The pipeline
/// only ever needs this one operation, and injecting a double here lets the
/// adapters be tested without ffmpeg or whisper.cpp installed.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}
