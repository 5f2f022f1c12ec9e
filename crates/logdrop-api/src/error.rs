//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. Domain errors (`AppError`,
//! `StorageError`, multipart failures) convert into `HttpAppError`, whose
//! `IntoResponse` logs the failure and renders the error message as a
//! plain-text body.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use logdrop_core::{AppError, ErrorMetadata};
use logdrop_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from logdrop-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::PathEscape(msg) => AppError::PathEscape(msg),
            other => AppError::Io(other.to_string()),
        };
        HttpAppError(app)
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        HttpAppError(multipart_failure(&err))
    }
}

/// Parse failure for a multipart read error, naming a body-limit overflow
/// instead of the opaque stream error multer reports for it.
pub(crate) fn multipart_failure(err: &MultipartError) -> AppError {
    let detail = err.body_text();
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::ParseFailure(format!("request body exceeds upload size limit ({})", detail))
    } else {
        AppError::ParseFailure(detail)
    }
}

impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::ParseFailure(rejection.body_text()))
    }
}

fn log_error(error: &AppError) {
    tracing::error!(
        error = %error,
        error_code = error.error_code(),
        "Request failed"
    );
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status =
            StatusCode::from_u16(app_error.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST);

        log_error(app_error);

        (status, app_error.client_message()).into_response()
    }
}
