use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ProcessError, ProcessOutput, ProcessRunner};

/// Real process invoker backed by `tokio::process`. Waits for the child to
/// exit and captures both output streams; there is no cancellation — once
/// launched, a process runs to completion or failure.
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }

        tracing::debug!(program = %program.display(), ?args, "Launching external process");

        let output = command.output().await.map_err(|e| ProcessError::Launch {
            program: program.display().to_string(),
            source: e,
        })?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
