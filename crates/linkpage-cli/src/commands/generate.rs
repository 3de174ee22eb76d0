//! Page generation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use linkpage_core::{render, storage, LinkStore};

use super::storage_failure;
use crate::output::Output;

/// Render the page and write it to `output_file`, resolved against `base_dir`
pub fn write_page(store: &LinkStore, base_dir: &Path) -> Result<PathBuf> {
    let target = base_dir.join(&store.config().output_file);
    let html = render(store.config(), store.links());

    storage::atomic_write(&target, html.as_bytes()).map_err(storage_failure)?;
    info!(
        "Rendered {} of {} links to {:?}",
        store.enabled_count(),
        store.len(),
        target
    );
    Ok(target)
}

/// Generate the page, optionally opening it in the browser
pub fn run(store: &LinkStore, base_dir: &Path, open: bool, output: &Output) -> Result<()> {
    let target = write_page(store, base_dir)?;

    if output.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "output_file": target,
                "links": store.enabled_count()
            })
        );
    } else {
        output.success(&format!("HTML file generated as {}", target.display()));
    }

    if open {
        open::that(&target).with_context(|| format!("Failed to open {}", target.display()))?;
    }

    Ok(())
}
