//! `POST /upload`: multipart log ingestion.

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::multipart::{drain_field, read_file_field, read_text_field};
use axum::extract::{
    multipart::{Multipart, MultipartRejection},
    State,
};
use chrono::Local;
use logdrop_core::constants::{BRANCH_FIELD, COMMIT_FIELD, FILE_FIELD, OK_BODY, PROJECT_FIELD};
use logdrop_core::UploadRequest;
use std::sync::Arc;

/// Accept one log artifact and store it under today's date directory.
///
/// Parts are dispatched on their form name; parts with any other name are
/// drained and ignored. Any failure ends the request with `400` and the error
/// message as body.
pub async fn upload_log(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<&'static str, HttpAppError> {
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart).await?;

    upload.validate()?;

    let date = Local::now().date_naive();
    match state.storage.store(&upload, date).await? {
        Some(path) => tracing::info!(
            project = %upload.project_name,
            branch = %upload.branch,
            commit = %upload.commit,
            path = %path.display(),
            "Upload accepted"
        ),
        None => tracing::info!(
            project = %upload.project_name,
            branch = %upload.branch,
            commit = %upload.commit,
            "Upload accepted without file data"
        ),
    }

    Ok(OK_BODY)
}

async fn read_upload(multipart: &mut Multipart) -> Result<UploadRequest, HttpAppError> {
    let mut upload = UploadRequest::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            PROJECT_FIELD => {
                read_text_field(&mut field, PROJECT_FIELD, &mut upload.project_name).await?
            }
            BRANCH_FIELD => read_text_field(&mut field, BRANCH_FIELD, &mut upload.branch).await?,
            COMMIT_FIELD => read_text_field(&mut field, COMMIT_FIELD, &mut upload.commit).await?,
            FILE_FIELD => read_file_field(&mut field, &mut upload.file_data).await?,
            _ => {
                let skipped = drain_field(&mut field).await?;
                tracing::debug!(field = %name, skipped_bytes = skipped, "Skipped unrecognized form field");
            }
        }
    }

    Ok(upload)
}
