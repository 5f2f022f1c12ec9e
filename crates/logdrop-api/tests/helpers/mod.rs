//! Test helpers: build the router over a temporary storage root.
//!
//! Run from workspace root: `cargo test -p logdrop-api`.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use chrono::Local;
use logdrop_api::setup::{routes, storage};
use logdrop_api::state::AppState;
use logdrop_core::{BaseConfig, Config, IngestConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const RAW_BOUNDARY: &str = "logdrop-test-boundary";

/// Test application: server plus the temporary directory holding its storage root.
pub struct TestApp {
    pub server: TestServer,
    pub storage_root: PathBuf,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Where an upload for the given metadata lands today.
    pub fn artifact_path(&self, project: &str, branch: &str, commit: &str) -> PathBuf {
        self.storage_root
            .join(today())
            .join(format!("{}_{}_{}.log", project, branch, commit))
    }

    pub fn sandbox(&self) -> &Path {
        self.temp_dir.path()
    }
}

pub fn test_config(storage_path: PathBuf, max_upload_size_bytes: usize) -> Config {
    Config(Box::new(IngestConfig {
        base: BaseConfig {
            server_port: 8080,
            environment: "test".to_string(),
            http_concurrency_limit: 64,
        },
        storage_path,
        max_upload_size_bytes,
        log_file: None,
    }))
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn setup_test_app_with_limit(max_upload_size_bytes: usize) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage_root = temp_dir.path().join("files");

    let config = test_config(storage_root.clone(), max_upload_size_bytes);
    let state = Arc::new(AppState {
        storage: storage::setup_storage(&config),
    });
    let app = routes::setup_routes(&config, state);

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage_root,
        temp_dir,
    }
}

/// Today's date directory name, as the handler computes it.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn file_part(data: &[u8]) -> Part {
    Part::bytes(Bytes::copy_from_slice(data))
        .file_name("build.log")
        .mime_type("text/plain")
}

/// A complete upload form: the three metadata fields plus the file.
pub fn upload_form(project: &str, branch: &str, commit: &str, data: &[u8]) -> MultipartForm {
    MultipartForm::new()
        .add_text("project", project.to_string())
        .add_text("branch", branch.to_string())
        .add_text("commit", commit.to_string())
        .add_part("file", file_part(data))
}

/// `Content-Type` header value matching [`raw_multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", RAW_BOUNDARY)
}

/// Hand-encoded multipart body, for requests that need a declared length.
/// Parts named `file` carry a filename.
pub fn raw_multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in parts {
        body.extend_from_slice(format!("--{}\r\n", RAW_BOUNDARY).as_bytes());
        if *name == "file" {
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"build.log\"\r\n\
                     Content-Type: text/plain\r\n\r\n",
                    name
                )
                .as_bytes(),
            );
        } else {
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            );
        }
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", RAW_BOUNDARY).as_bytes());
    body
}
