//! Route configuration and setup

mod health;

use crate::handlers;
use crate::middleware::{access_log_middleware, request_id_middleware};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, post},
    Router,
};
use logdrop_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let max_body = config.max_upload_size_bytes();
    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit,
        max_body_bytes = max_body,
        "HTTP limits configured"
    );

    Router::new()
        .route("/upload", post(handlers::upload::upload_log))
        .route("/healthz", any(health::health_check))
        .with_state(state)
        // Overflow surfaces while the multipart body is read, as a 400.
        .layer(DefaultBodyLimit::max(max_body))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(axum::middleware::from_fn(access_log_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
