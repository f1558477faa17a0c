use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::{ArtifactKind, JobId};

/// Filesystem-backed artifact store. Every path is namespaced by the job
/// identifier, so concurrent requests never contend for the same file.
pub struct WorkDirStore {
    root: PathBuf,
    keep_files: bool,
}

impl WorkDirStore {
    pub fn new(root: PathBuf, keep_files: bool) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root, keep_files })
    }
}

#[async_trait]
impl ArtifactStore for WorkDirStore {
    fn allocate(&self) -> JobId {
        JobId::new()
    }

    fn path_for(&self, id: JobId, kind: ArtifactKind) -> PathBuf {
        self.root.join(format!("{}.{}", id, kind.extension()))
    }

    async fn persist_upload(
        &self,
        id: JobId,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ArtifactStoreError> {
        let path = self.path_for(id, ArtifactKind::RawUpload);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => {
                    ArtifactStoreError::AlreadyExists(path.display().to_string())
                }
                _ => ArtifactStoreError::Io(e),
            })?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    // Partial upload is garbage; drop it before surfacing.
                    drop(file);
                    let _ = tokio::fs::remove_file(&path).await;
                    return Err(ArtifactStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = file.write_all(&bytes).await {
                drop(file);
                let _ = tokio::fs::remove_file(&path).await;
                return Err(ArtifactStoreError::Io(e));
            }
        }

        file.flush().await?;

        tracing::debug!(job_id = %id, bytes = total_bytes, "Upload persisted");

        Ok(total_bytes)
    }

    async fn fetch(&self, id: JobId, kind: ArtifactKind) -> Result<Vec<u8>, ArtifactStoreError> {
        let path = self.path_for(id, kind);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ArtifactStoreError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(ArtifactStoreError::Io(e)),
        }
    }

    async fn remove(&self, id: JobId, kind: ArtifactKind, force: bool) {
        if self.keep_files && !force {
            tracing::debug!(job_id = %id, ?kind, "Retention enabled, keeping artifact");
            return;
        }

        let path = self.path_for(id, kind);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(job_id = %id, ?kind, "Artifact removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(job_id = %id, ?kind, "Artifact already absent")
            }
            Err(e) => tracing::warn!(job_id = %id, ?kind, error = %e, "Could not remove artifact"),
        }
    }
}
