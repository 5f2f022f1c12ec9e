//! Configuration module
//!
//! Settings are read from the process environment (optionally seeded from a
//! `.env` file) once at startup and never change afterwards.

use std::env;
use std::path::{Path, PathBuf};

const SERVER_PORT: u16 = 80;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const STORAGE_PATH: &str = "files";
const MAX_UPLOAD_SIZE_MB: usize = 16;
const LOG_FILE: &str = "server.log";

/// Process-level settings not tied to log ingestion.
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub http_concurrency_limit: usize,
}

/// Ingestion settings: where artifacts go and how large a request may be.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub base: BaseConfig,
    pub storage_path: PathBuf,
    pub max_upload_size_bytes: usize,
    /// Append-only log file. `None` logs to the console only.
    pub log_file: Option<PathBuf>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<IngestConfig>);

impl Config {
    fn as_ingest(&self) -> &IngestConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = IngestConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_ingest().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_ingest().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_ingest().base.environment
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_ingest().base.http_concurrency_limit
    }

    pub fn storage_path(&self) -> &Path {
        &self.as_ingest().storage_path
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_ingest().max_upload_size_bytes
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.as_ingest().log_file.as_deref()
    }
}

impl IngestConfig {
    /// Build the configuration from a key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let base = BaseConfig {
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?,
            environment,
            http_concurrency_limit: lookup("HTTP_CONCURRENCY_LIMIT")
                .unwrap_or_else(|| HTTP_CONCURRENCY_LIMIT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be a whole number"))?,
        };

        let max_upload_size_mb = lookup("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a whole number"))?;

        let storage_path = PathBuf::from(
            lookup("STORAGE_PATH").unwrap_or_else(|| STORAGE_PATH.to_string()),
        );

        // An explicitly empty LOG_FILE turns file logging off.
        let log_file = match lookup("LOG_FILE") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(LOG_FILE)),
        };

        Ok(IngestConfig {
            base,
            storage_path,
            max_upload_size_bytes: max_upload_size_mb.saturating_mul(1024 * 1024),
            log_file,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must not be 0"));
        }

        if self.storage_path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("STORAGE_PATH must not be empty"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be greater than 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        Ok(())
    }
}
