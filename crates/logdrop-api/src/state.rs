//! Application state shared by all handlers.

use logdrop_storage::LogStore;
use std::sync::Arc;

/// Immutable per-process state; the filesystem is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn LogStore>,
}
