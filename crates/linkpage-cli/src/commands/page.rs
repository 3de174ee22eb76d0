//! Page configuration command handlers

use std::path::Path;

use anyhow::{bail, Result};

use linkpage_core::{ConfigField, ConfigUpdate, LinkStore, StoreError};

use super::save_store;
use crate::output::Output;

/// Show page settings
pub fn show(store: &LinkStore, output: &Output) -> Result<()> {
    output.print_page(store.config());
    Ok(())
}

/// Set one page setting
pub fn set(store: &mut LinkStore, state: &Path, field: &str, value: &str, output: &Output) -> Result<()> {
    let update = ConfigUpdate::parse(field, value).map_err(|e: StoreError| {
        let valid: Vec<&str> = ConfigField::ALL.iter().map(|f| f.key()).collect();
        anyhow::anyhow!("{}\nValid fields: {}", e, valid.join(", "))
    })?;
    if value.is_empty() {
        bail!("{} cannot be empty.", update.field.label());
    }

    store.update_config(&[update]);
    save_store(store, state)?;

    output.success(&format!("Set {} = {}", field, value));
    Ok(())
}
