//! Subcommand handlers
//!
//! Each handler works on a loaded `LinkStore`. Handlers that change the
//! store save it to the state file before reporting success.

pub mod config;
pub mod generate;
pub mod link;
pub mod page;
pub mod status;
pub mod theme;

use std::path::Path;

use anyhow::Result;

use linkpage_core::{LinkStore, StorageError, StoreOrigin};

use crate::output::Output;

/// Save the store, attaching a recovery hint to storage failures
pub fn save_store(store: &LinkStore, path: &Path) -> Result<()> {
    store.save(path).map_err(storage_failure)
}

/// Turn a storage error into a user-facing error with its recovery hint
pub fn storage_failure(err: StorageError) -> anyhow::Error {
    match err.recovery_suggestion() {
        Some(hint) => anyhow::anyhow!("{}\n{}", err, hint),
        None => anyhow::Error::new(err),
    }
}

/// Tell the user when a broken state file was replaced by defaults
pub fn report_origin(store: &LinkStore, path: &Path, output: &Output) {
    if let StoreOrigin::Recovered { reason } = store.origin() {
        output.warn(&format!("Error loading {}: {}", path.display(), reason));
        output.warn("Using default configuration instead.");
    }
}
