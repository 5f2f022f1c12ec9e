//! On-demand creation of storage directories.

use crate::traits::{StorageError, StorageResult};
use std::io;
use std::path::Path;
use tokio::fs;

/// Permissions for directories created by the store (owner only).
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// Make sure `path` exists and is a directory, creating it when absent.
///
/// Safe to call concurrently for the same path: losing the creation race to
/// another request is not an error.
pub async fn ensure_dir(path: &Path) -> StorageResult<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(StorageError::NotADirectory(path.display().to_string())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(StorageError::DirectoryFailed(format!(
                "{}: {}",
                path.display(),
                e
            )));
        }
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);

    match builder.create(path).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Created storage directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && is_dir(path).await => Ok(()),
        Err(e) => Err(StorageError::DirectoryFailed(format!(
            "{}: {}",
            path.display(),
            e
        ))),
    }
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
