//! linkpage core library
//!
//! This crate provides the core functionality for linkpage, a small
//! "link-in-bio" page manager: an ordered list of labeled links plus a theme,
//! rendered to a single static HTML file.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = LinkStore::load(Path::new("linktree_config.json"));
//!
//! // Add a link
//! store.add(NewLink::new("Blog", "https://blog.example").style(LinkStyle::Primary));
//!
//! // Render and persist
//! let html = render::render(store.config(), store.links());
//! store.save(Path::new("linktree_config.json"))?;
//! ```
//!
//! # Modules
//!
//! - `store`: the link store (main entry point)
//! - `models`: link records, styles, page configuration, update requests
//! - `theme`: theme colors and hex color validation
//! - `render`: HTML page rendering
//! - `defaults`: built-in configuration and seed links
//! - `storage`: JSON document persistence
//! - `config`: application configuration

pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;
pub mod theme;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use models::{
    ConfigField, ConfigUpdate, CustomStyle, Link, LinkField, LinkStyle, LinkUpdate, NewLink,
    PageConfig,
};
pub use render::render;
pub use storage::{StorageError, StorageResult};
pub use store::{derive_id, LinkStore, StoreOrigin};
pub use theme::{HexColor, Theme, ThemeColor};
