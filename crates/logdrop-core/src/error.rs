//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Every variant is
//! reported to the uploader as `400 Bad Request` with the error message as the
//! body; the variants only differ in their machine-readable code and in how
//! they are produced.

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "PARSE_FAILURE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The multipart stream (or one of its text values) could not be decoded.
    #[error("{0}")]
    ParseFailure(String),

    /// A required metadata field was empty after the whole body was read.
    #[error("{0} should not be empty")]
    MissingField(&'static str),

    /// Directory creation or file write failed.
    #[error("{0}")]
    Io(String),

    /// The artifact path would have left the storage directory.
    #[error("path escapes storage directory: {0}")]
    PathEscape(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        400
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::ParseFailure(_) => "PARSE_FAILURE",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::Io(_) => "IO_FAILURE",
            AppError::PathEscape(_) => "PATH_ESCAPE",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
