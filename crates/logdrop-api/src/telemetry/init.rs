use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "logdrop=info,tower_http=info";

/// Owns the log file for the lifetime of the process.
///
/// Returned by [`init_telemetry`] and handed back to [`shutdown_telemetry`]
/// once the server has stopped.
#[derive(Debug)]
pub struct TelemetryGuard {
    log_file: Option<Arc<File>>,
}

/// Initialize tracing: a compact console layer plus, when `log_file` is set,
/// an append-only plain-text file layer with source locations.
///
/// Fails when the log file cannot be opened; the caller is expected to abort.
pub fn init_telemetry(log_file: Option<&Path>) -> Result<TelemetryGuard, anyhow::Error> {
    let file = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(Arc::new(file))
        }
        None => None,
    };

    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let file_fmt = file.clone().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(console_fmt)
        .with(file_fmt)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    match log_file {
        Some(path) => tracing::info!(log_file = %path.display(), "Logging to console and file"),
        None => tracing::info!("Logging to console only"),
    }

    Ok(TelemetryGuard { log_file: file })
}

/// Flush the log file. Called once, after the server has shut down.
pub async fn shutdown_telemetry(guard: TelemetryGuard) {
    tracing::info!("Telemetry shutdown");

    if let Some(file) = guard.log_file {
        if let Err(e) = file.sync_all() {
            eprintln!("Failed to flush log file: {}", e);
        }
    }
}
