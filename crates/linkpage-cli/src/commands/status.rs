//! Status command handler

use std::path::Path;

use anyhow::Result;

use linkpage_core::{LinkStore, StoreOrigin};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &LinkStore, state: &Path, output: &Output) -> Result<()> {
    let config = store.config();
    let origin = match store.origin() {
        StoreOrigin::File => "file".to_string(),
        StoreOrigin::Defaults => "defaults".to_string(),
        StoreOrigin::Recovered { reason } => format!("recovered ({})", reason),
    };

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "state_file": state,
                    "origin": origin,
                    "output_file": config.output_file,
                    "counts": {
                        "links": store.len(),
                        "enabled": store.enabled_count(),
                        "disabled": store.len() - store.enabled_count()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", state.display());
        }
        OutputFormat::Human => {
            println!("{} Status", config.logo_text);
            println!("{}", "=".repeat(config.logo_text.chars().count() + 7));
            println!();
            println!("State:");
            println!("  File:   {}", state.display());
            println!("  Source: {}", origin);
            println!();
            println!("Page:");
            println!("  Title:  {}", config.title);
            println!("  Output: {}", config.output_file);
            println!();
            println!("Links:");
            println!("  Total:    {}", store.len());
            println!("  Enabled:  {}", store.enabled_count());
            println!("  Disabled: {}", store.len() - store.enabled_count());
        }
    }

    Ok(())
}
