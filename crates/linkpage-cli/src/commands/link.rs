//! Link command handlers

use std::path::Path;

use anyhow::{bail, Result};

use linkpage_core::{LinkStore, LinkStyle, LinkUpdate, NewLink, StoreError};

use super::save_store;
use crate::output::Output;
use crate::prompt::confirm;

/// Optional settings for `link add`
#[derive(Debug, Default)]
pub struct AddOptions {
    pub icon: Option<String>,
    pub style: Option<String>,
    pub badge: Option<String>,
    pub id: Option<String>,
    pub disabled: bool,
}

/// Add a new link
pub fn add(
    store: &mut LinkStore,
    state: &Path,
    title: String,
    url: String,
    options: AddOptions,
    output: &Output,
) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Title cannot be empty.");
    }
    if url.trim().is_empty() {
        bail!("URL cannot be empty.");
    }

    let mut new_link = NewLink::new(title, url)
        .badge(options.badge.filter(|b| !b.is_empty()))
        .enabled(!options.disabled);
    if let Some(icon) = options.icon.filter(|i| !i.is_empty()) {
        new_link = new_link.icon(icon);
    }
    if let Some(style) = options.style {
        new_link = new_link.style(LinkStyle::from(style));
    }
    if let Some(id) = options.id {
        new_link = new_link.id(id);
    }

    let link = store.add(new_link).clone();
    save_store(store, state)?;

    output.success(&format!("Added new link: {}", link.title));
    output.print_link(&link);

    Ok(())
}

/// List all links in page order
pub fn list(store: &LinkStore, output: &Output) -> Result<()> {
    output.print_links(store.links());
    Ok(())
}

/// Show a single link
pub fn show(store: &LinkStore, id: &str, output: &Output) -> Result<()> {
    let link = store.get(id).ok_or_else(|| not_found(id))?;
    output.print_link(link);
    Ok(())
}

/// Set one field of a link
pub fn set(
    store: &mut LinkStore,
    state: &Path,
    id: &str,
    field: &str,
    value: &str,
    output: &Output,
) -> Result<()> {
    let update = LinkUpdate::parse(field, value).map_err(|e| match e {
        StoreError::UnknownField { .. } => anyhow::anyhow!(
            "{}\nValid fields: title, url, icon, style, badge, enabled",
            e
        ),
        other => other.into(),
    })?;

    if !store.update(id, &[update]) {
        return Err(not_found(id));
    }
    save_store(store, state)?;

    if let Some(link) = store.get(id) {
        output.success(&format!("Updated link: {}", link.title));
    }
    Ok(())
}

/// Enable or disable a link
pub fn set_enabled(
    store: &mut LinkStore,
    state: &Path,
    id: &str,
    enabled: bool,
    output: &Output,
) -> Result<()> {
    let found = if enabled {
        store.enable(id)
    } else {
        store.disable(id)
    };
    if !found {
        return Err(not_found(id));
    }
    save_store(store, state)?;

    let verb = if enabled { "Enabled" } else { "Disabled" };
    output.success(&format!("{} link: {}", verb, id));
    Ok(())
}

/// Delete a link
pub fn delete(store: &mut LinkStore, state: &Path, id: &str, output: &Output) -> Result<()> {
    let link = store.get(id).ok_or_else(|| not_found(id))?;

    // Confirm deletion
    if output.should_prompt() && atty::is(atty::Stream::Stdin) {
        println!("Delete link: {} - {}", link.id, link.title);
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    store.delete(id);
    save_store(store, state)?;

    output.success(&format!("Deleted link with ID: {}", id));
    Ok(())
}

/// Reorder links; every id must be given exactly once
pub fn reorder(store: &mut LinkStore, state: &Path, ids: &[String], output: &Output) -> Result<()> {
    store.reorder(ids)?;
    save_store(store, state)?;

    output.success("Links reordered successfully");
    Ok(())
}

fn not_found(id: &str) -> anyhow::Error {
    StoreError::LinkNotFound { id: id.to_string() }.into()
}
