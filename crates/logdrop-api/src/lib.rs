//! Logdrop API Library
//!
//! This crate provides the HTTP handlers, middleware, telemetry and
//! application setup for the log ingestion service.

mod handlers;
mod middleware;
mod utils;

pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
