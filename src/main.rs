use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use scribed::application::services::TranscriptionService;
use scribed::infrastructure::media::{FfmpegTranscoder, WhisperRecognizer};
use scribed::infrastructure::observability::{TracingConfig, init_tracing};
use scribed::infrastructure::process::TokioProcessRunner;
use scribed::infrastructure::storage::WorkDirStore;
use scribed::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::resolve();

    init_tracing(TracingConfig::default(), settings.server.port);

    let store = Arc::new(WorkDirStore::new(
        settings.media.work_dir.clone(),
        settings.media.keep_files,
    )?);

    let runner: Arc<TokioProcessRunner> = Arc::new(TokioProcessRunner);
    let transcoder = Arc::new(FfmpegTranscoder::new(
        runner.clone(),
        settings.media.ffmpeg_binary.clone(),
    ));
    let recognizer = Arc::new(WhisperRecognizer::new(
        runner,
        settings.whisper.binary.clone(),
        settings.whisper.model_dir.clone(),
        settings.whisper.model.clone(),
        settings.whisper.threads,
        settings.whisper.processors,
    ));

    let transcription = Arc::new(TranscriptionService::new(
        store.clone(),
        transcoder,
        recognizer,
        settings.media.cut_seconds,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        store,
        transcription,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Starting backend server at {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
