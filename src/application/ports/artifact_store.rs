use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{ArtifactKind, JobId};

/// Owns the per-job temporary file set: allocation of job identifiers,
/// the single authoritative path scheme, upload persistence, and the
/// cleanup policy (including the retention flag).
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Mints a fresh job identifier. No file exists for it yet.
    fn allocate(&self) -> JobId;

    fn path_for(&self, id: JobId, kind: ArtifactKind) -> PathBuf;

    /// Streams an upload body to the raw-upload path under exclusive
    /// create and returns the number of bytes written. A file already at
    /// that path is an error even though identifier uniqueness should
    /// make it unreachable.
    async fn persist_upload(
        &self,
        id: JobId,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ArtifactStoreError>;

    async fn fetch(&self, id: JobId, kind: ArtifactKind) -> Result<Vec<u8>, ArtifactStoreError>;

    /// Best-effort removal of one artifact. Missing files are logged and
    /// swallowed. When the retention flag is set this is a no-op unless
    /// `force` is passed (the raw upload is always force-removed once
    /// transcoded: a disposable intermediate, not a deliverable).
    async fn remove(&self, id: JobId, kind: ArtifactKind, force: bool);
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact already exists: {0}")]
    AlreadyExists(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
