use super::request_id::RequestId;
use axum::extract::{ConnectInfo, Request};
use axum::http::header::CONTENT_LENGTH;
use axum::{middleware::Next, response::Response};
use std::net::SocketAddr;

/// Log method, path, remote address and declared content length of every
/// request before it reaches its handler.
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    // -1 when the client did not declare a length (e.g. chunked bodies).
    let content_length = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(-1);

    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        remote_addr = %remote_addr,
        content_length,
        request_id = %request_id,
        "Request received"
    );

    next.run(request).await
}
