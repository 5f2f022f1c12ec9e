//! Logdrop Core Library
//!
//! This crate provides the configuration, error types and upload model
//! shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, IngestConfig};
pub use error::{AppError, ErrorMetadata};
pub use models::UploadRequest;
