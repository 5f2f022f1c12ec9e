//! Artifact key layout: `{YYYY-MM-DD}/{project}_{branch}_{commit}.log`.

use chrono::NaiveDate;
use logdrop_core::constants::DATE_DIR_FORMAT;
use logdrop_core::UploadRequest;

/// Name of the date-keyed subdirectory, e.g. `2024-03-09`.
pub fn date_dir_name(date: NaiveDate) -> String {
    date.format(DATE_DIR_FORMAT).to_string()
}

/// Storage-relative key of an upload, used for logging.
pub fn artifact_key(upload: &UploadRequest, date: NaiveDate) -> String {
    format!("{}/{}", date_dir_name(date), upload.artifact_file_name())
}
