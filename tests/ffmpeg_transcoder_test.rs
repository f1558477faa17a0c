use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use scribed::application::ports::{
    ProcessError, ProcessOutput, ProcessRunner, TranscodeError, Transcoder,
};
use scribed::infrastructure::media::FfmpegTranscoder;

/// Records every invocation and replays a canned result.
struct RecordingRunner {
    calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
    exit_code: Option<i32>,
    stderr: String,
}

impl RecordingRunner {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            exit_code: Some(0),
            stderr: String::new(),
        })
    }

    fn failing(stderr: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            exit_code: Some(1),
            stderr: stderr.to_string(),
        })
    }

    fn recorded_args(&self) -> Vec<String> {
        self.calls.lock().unwrap()[0].1.clone()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        _working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));
        Ok(ProcessOutput {
            stdout: String::new(),
            stderr: self.stderr.clone(),
            exit_code: self.exit_code,
        })
    }
}

struct UnlaunchableRunner;

#[async_trait]
impl ProcessRunner for UnlaunchableRunner {
    async fn run(
        &self,
        program: &Path,
        _args: &[String],
        _working_dir: Option<&Path>,
    ) -> Result<ProcessOutput, ProcessError> {
        Err(ProcessError::Launch {
            program: program.display().to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
    }
}

fn transcoder(runner: Arc<dyn ProcessRunner>) -> FfmpegTranscoder {
    FfmpegTranscoder::new(runner, PathBuf::from("ffmpeg"))
}

#[tokio::test]
async fn given_no_truncation_then_args_normalize_without_duration_limit() {
    let runner = RecordingRunner::succeeding();
    let sut = transcoder(runner.clone());

    sut.transcode(Path::new("in.webm"), Path::new("out.wav"), 0)
        .await
        .unwrap();

    assert_eq!(
        runner.recorded_args(),
        vec![
            "-y", "-i", "in.webm", "-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le", "out.wav"
        ]
    );
}

#[tokio::test]
async fn given_truncation_then_duration_limit_precedes_output_options() {
    let runner = RecordingRunner::succeeding();
    let sut = transcoder(runner.clone());

    sut.transcode(Path::new("in.webm"), Path::new("out.wav"), 30)
        .await
        .unwrap();

    assert_eq!(
        runner.recorded_args(),
        vec![
            "-y", "-i", "in.webm", "-t", "30", "-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le",
            "out.wav"
        ]
    );
}

#[tokio::test]
async fn given_nonzero_exit_then_error_carries_diagnostic_text() {
    let runner = RecordingRunner::failing("in.webm: Invalid data found");
    let sut = transcoder(runner);

    let err = sut
        .transcode(Path::new("in.webm"), Path::new("out.wav"), 0)
        .await
        .unwrap_err();

    match err {
        TranscodeError::Failed(msg) => assert!(msg.contains("Invalid data found")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_launch_failure_then_error_is_launch_variant() {
    let sut = transcoder(Arc::new(UnlaunchableRunner));

    let err = sut
        .transcode(Path::new("in.webm"), Path::new("out.wav"), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, TranscodeError::Launch(_)));
}
