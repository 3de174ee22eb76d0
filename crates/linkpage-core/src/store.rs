//! Link store
//!
//! The `LinkStore` owns the page configuration (including the theme) and the
//! ordered list of link records. Every mutation happens in memory; nothing is
//! written to disk until the caller asks for `save`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = LinkStore::load(Path::new("linktree_config.json"));
//!
//! let link = store.add(NewLink::new("Blog", "https://blog.example"));
//! store.disable("blog");
//! store.reorder(&["blog", "discord", /* ... */])?;
//!
//! store.save(Path::new("linktree_config.json"))?;
//! ```

use std::path::Path;

use tracing::{debug, info, warn};

use crate::defaults;
use crate::error::{StoreError, StoreResult};
use crate::models::{ConfigUpdate, Link, LinkUpdate, NewLink, PageConfig};
use crate::storage::{self, StorageResult};
use crate::theme::{HexColor, Theme, ThemeColor};

/// Where the in-memory store came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOrigin {
    /// Loaded from the persisted document
    File,
    /// No document existed; built-in defaults are in use
    Defaults,
    /// The document could not be read; defaults are in use
    Recovered { reason: String },
}

/// Ordered link records plus page configuration
#[derive(Debug, Clone)]
pub struct LinkStore {
    config: PageConfig,
    links: Vec<Link>,
    origin: StoreOrigin,
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new(PageConfig::default(), defaults::links())
    }
}

impl LinkStore {
    /// Build a store from explicit parts
    pub fn new(config: PageConfig, links: Vec<Link>) -> Self {
        Self {
            config,
            links,
            origin: StoreOrigin::Defaults,
        }
    }

    /// Load the store from `path`, falling back to defaults
    ///
    /// - Missing file: default configuration and seed links.
    /// - Unreadable or unparsable file: same defaults, with the reason
    ///   recorded in [`StoreOrigin::Recovered`].
    /// - Document without a `links` key: persisted config, seed links.
    pub fn load(path: &Path) -> Self {
        match storage::read_document(path) {
            Ok(Some(doc)) => {
                let links = doc.links.unwrap_or_else(defaults::links);
                info!("Loaded {} links from {:?}", links.len(), path);
                Self {
                    config: doc.config,
                    links,
                    origin: StoreOrigin::File,
                }
            }
            Ok(None) => {
                info!("No store document at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                warn!("Failed to load {:?}: {}. Using defaults instead.", path, e);
                Self {
                    origin: StoreOrigin::Recovered {
                        reason: e.to_string(),
                    },
                    ..Self::default()
                }
            }
        }
    }

    /// Persist configuration and links to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> StorageResult<()> {
        storage::write_document(path, &self.config, &self.links)?;
        info!("Saved {} links to {:?}", self.links.len(), path);
        Ok(())
    }

    pub fn origin(&self) -> &StoreOrigin {
        &self.origin
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    /// Links in page order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.links.iter().filter(|l| l.enabled).count()
    }

    /// First link with the given id
    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    // ==================== Link Operations ====================

    /// Append a link and return it
    ///
    /// Without an explicit id, one is derived from the title (see
    /// [`derive_id`]). A derived id that is already taken gets the suffix
    /// `_<link count before insertion>`. Explicit ids are used verbatim.
    pub fn add(&mut self, new: NewLink) -> &Link {
        let id = match new.id {
            Some(id) => id,
            None => self.unique_id(derive_id(&new.title)),
        };

        debug!("Adding link {:?} ({})", id, new.title);
        self.links.push(Link {
            title: new.title,
            url: new.url,
            icon: new.icon,
            style: new.style,
            badge: new.badge,
            enabled: new.enabled,
            id,
        });
        &self.links[self.links.len() - 1]
    }

    /// Apply `updates` to the link with `id`; returns whether it was found
    pub fn update(&mut self, id: &str, updates: &[LinkUpdate]) -> bool {
        match self.position(id) {
            Some(index) => self.update_at(index, updates),
            None => {
                debug!("Link {:?} not found for update", id);
                false
            }
        }
    }

    /// Apply `updates` to the link at `index` in page order
    ///
    /// Addresses one record even when explicit ids are duplicated.
    pub fn update_at(&mut self, index: usize, updates: &[LinkUpdate]) -> bool {
        match self.links.get_mut(index) {
            Some(link) => {
                link.apply_all(updates);
                debug!("Updated link {:?} at {}", link.id, index);
                true
            }
            None => false,
        }
    }

    pub fn enable(&mut self, id: &str) -> bool {
        self.update(id, &[LinkUpdate::Enabled(true)])
    }

    pub fn disable(&mut self, id: &str) -> bool {
        self.update(id, &[LinkUpdate::Enabled(false)])
    }

    /// Remove the first link with `id`; returns whether it was found
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => self.delete_at(index).is_some(),
            None => false,
        }
    }

    /// Remove and return the link at `index` in page order
    pub fn delete_at(&mut self, index: usize) -> Option<Link> {
        if index >= self.links.len() {
            return None;
        }
        let link = self.links.remove(index);
        debug!("Deleted link {:?} at {}", link.id, index);
        Some(link)
    }

    /// Replace the link order with `ids`
    ///
    /// `ids` must name every link exactly once (as a multiset, so duplicated
    /// explicit ids must be repeated the same number of times). On any
    /// mismatch the store is left untouched.
    pub fn reorder<S: AsRef<str>>(&mut self, ids: &[S]) -> StoreResult<()> {
        if ids.len() != self.links.len() {
            return Err(StoreError::ReorderMismatch {
                reason: format!(
                    "expected {} ids, got {}",
                    self.links.len(),
                    ids.len()
                ),
            });
        }

        let mut remaining: Vec<Option<&Link>> = self.links.iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(self.links.len());
        for id in ids {
            let id = id.as_ref();
            let slot = remaining
                .iter_mut()
                .find(|slot| slot.is_some_and(|l| l.id == id))
                .ok_or_else(|| StoreError::ReorderMismatch {
                    reason: format!("ID '{}' not found or listed more than once", id),
                })?;
            if let Some(link) = slot.take() {
                ordered.push(link.clone());
            }
        }

        self.links = ordered;
        debug!("Reordered {} links", self.links.len());
        Ok(())
    }

    /// Ordered `(id, title)` pairs
    pub fn list_ids(&self) -> Vec<(&str, &str)> {
        self.links
            .iter()
            .map(|l| (l.id.as_str(), l.title.as_str()))
            .collect()
    }

    // ==================== Page Operations ====================

    /// Set theme colors; all values are validated before any is applied
    pub fn update_theme<S: AsRef<str>>(&mut self, updates: &[(ThemeColor, S)]) -> StoreResult<()> {
        let parsed = updates
            .iter()
            .map(|(role, value)| HexColor::parse(value.as_ref()).map(|c| (*role, c)))
            .collect::<StoreResult<Vec<_>>>()?;

        for (role, color) in parsed {
            debug!("Theme {} = {}", role.key(), color);
            self.config.theme.set(role, color);
        }
        Ok(())
    }

    /// Set page configuration fields (the theme is not reachable here)
    pub fn update_config(&mut self, updates: &[ConfigUpdate]) {
        for update in updates {
            debug!("Config {} updated", update.field.key());
            self.config.apply(update);
        }
    }

    /// Pick a free id, starting from `base` then `base_<len>`
    fn unique_id(&self, base: String) -> String {
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = self.links.len();
        loop {
            let candidate = format!("{}_{}", base, n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|l| l.id == id)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.links.iter().any(|l| l.id == id)
    }
}

/// Derive a link id from a title
///
/// Lower-cases the title, folds accented Latin letters to their base letter
/// and keeps only ASCII letters and digits.
pub fn derive_id(title: &str) -> String {
    title
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
