//! Storage backend setup

use logdrop_core::Config;
use logdrop_storage::{LocalLogStore, LogStore};
use std::sync::Arc;

pub fn setup_storage(config: &Config) -> Arc<dyn LogStore> {
    tracing::info!(
        storage_path = %config.storage_path().display(),
        "Using local filesystem storage"
    );
    Arc::new(LocalLogStore::new(config.storage_path()))
}
