//! Storage abstraction trait

use async_trait::async_trait;
use chrono::NaiveDate;
use logdrop_core::UploadRequest;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("path escapes storage directory: {0}")]
    PathEscape(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to create directory {0}")]
    DirectoryFailed(String),

    #[error("failed to write {0}")]
    WriteFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for uploaded log artifacts.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Persist the upload's file data under the directory for `date`.
    ///
    /// Returns the written path, or `None` when the upload carried no file
    /// data and nothing was written. An existing artifact with the same
    /// project, branch, commit and date is overwritten.
    async fn store(&self, upload: &UploadRequest, date: NaiveDate)
        -> StorageResult<Option<PathBuf>>;
}
