//! Theme command handlers

use std::path::Path;

use anyhow::Result;

use linkpage_core::{LinkStore, StoreError, ThemeColor};

use super::save_store;
use crate::output::Output;

/// Show theme colors
pub fn show(store: &LinkStore, output: &Output) -> Result<()> {
    output.print_theme(store.theme());
    Ok(())
}

/// Set one theme color
pub fn set(store: &mut LinkStore, state: &Path, role: &str, value: &str, output: &Output) -> Result<()> {
    let role: ThemeColor = role.parse().map_err(|e: StoreError| {
        let valid: Vec<&str> = ThemeColor::ALL.iter().map(|r| r.key()).collect();
        anyhow::anyhow!("{}\nValid roles: {}", e, valid.join(", "))
    })?;

    store.update_theme(&[(role, value)])?;
    save_store(store, state)?;

    output.success(&format!("Set {} = {}", role.key(), value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_set_valid_color() {
        let temp_dir = TempDir::new().unwrap();
        let state = temp_dir.path().join("linktree_config.json");
        let mut store = LinkStore::default();
        let output = Output::new(OutputFormat::Quiet);

        set(&mut store, &state, "primary_color", "#123abc", &output).unwrap();

        let reloaded = LinkStore::load(&state);
        assert_eq!(reloaded.theme().primary_color.as_str(), "#123abc");
    }

    #[test]
    fn test_set_invalid_color_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let state = temp_dir.path().join("linktree_config.json");
        let mut store = LinkStore::default();
        let output = Output::new(OutputFormat::Quiet);

        let err = set(&mut store, &state, "bg_color", "yellow", &output).unwrap_err();
        assert!(err.to_string().contains("Invalid color"));
        assert_eq!(store.theme().bg_color.as_str(), "#FFE566");
        assert!(!state.exists());
    }

    #[test]
    fn test_set_unknown_role() {
        let temp_dir = TempDir::new().unwrap();
        let state = temp_dir.path().join("linktree_config.json");
        let mut store = LinkStore::default();
        let output = Output::new(OutputFormat::Quiet);

        let err = set(&mut store, &state, "accent", "#fff", &output).unwrap_err();
        assert!(err.to_string().contains("Valid roles: bg_color"));
    }
}
