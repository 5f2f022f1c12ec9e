//! Health check handler.

use logdrop_core::constants::OK_BODY;

/// Liveness probe - always `200 OK` while the process is serving.
pub async fn health_check() -> &'static str {
    OK_BODY
}
