use crate::dirs::ensure_dir;
use crate::keys::{artifact_key, date_dir_name};
use crate::paths::resolve_path;
use crate::traits::{LogStore, StorageError, StorageResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use logdrop_core::UploadRequest;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Permissions for stored artifacts (world readable, owner writable).
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalLogStore {
    base_path: PathBuf,
}

impl LocalLogStore {
    /// Create a new LocalLogStore instance
    ///
    /// The base directory is not touched here; it is (re)created on demand by
    /// every [`LogStore::store`] call.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LocalLogStore {
            base_path: base_path.into(),
        }
    }

    async fn write_artifact(path: &Path, data: &[u8]) -> StorageResult<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options.open(path).await.map_err(|e| {
            StorageError::WriteFailed(format!("{}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("{}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl LogStore for LocalLogStore {
    async fn store(
        &self,
        upload: &UploadRequest,
        date: NaiveDate,
    ) -> StorageResult<Option<PathBuf>> {
        if !upload.has_file_data() {
            tracing::debug!(
                project = %upload.project_name,
                branch = %upload.branch,
                commit = %upload.commit,
                "Upload carried no file data, nothing stored"
            );
            return Ok(None);
        }

        let start = std::time::Instant::now();

        ensure_dir(&self.base_path).await?;
        let date_dir = self.base_path.join(date_dir_name(date));
        ensure_dir(&date_dir).await?;

        let path = resolve_path(&date_dir, &upload.artifact_file_name())?;
        Self::write_artifact(&path, &upload.file_data).await?;

        tracing::info!(
            path = %path.display(),
            key = %artifact_key(upload, date),
            size_bytes = upload.file_data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Log artifact stored"
        );

        Ok(Some(path))
    }
}
