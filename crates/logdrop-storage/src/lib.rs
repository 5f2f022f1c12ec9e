//! Logdrop Storage Library
//!
//! This crate persists uploaded log artifacts. It provides the [`LogStore`]
//! trait and its local filesystem implementation.
//!
//! # Artifact layout
//!
//! Every artifact lives at `{base}/{YYYY-MM-DD}/{project}_{branch}_{commit}.log`.
//! The file name is built from uploader-controlled values, so the final path
//! is always produced by [`paths::resolve_path`], which refuses anything that
//! would land outside the date directory.

pub mod dirs;
pub(crate) mod keys;
pub mod local;
pub mod paths;
pub mod traits;

// Re-export commonly used types
pub use dirs::ensure_dir;
pub use local::LocalLogStore;
pub use paths::resolve_path;
pub use traits::{LogStore, StorageError, StorageResult};
