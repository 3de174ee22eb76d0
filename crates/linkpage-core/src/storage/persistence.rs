//! JSON document persistence
//!
//! Handles reading and writing the store document to the filesystem.
//! Uses atomic writes (write to temp file, then rename) so an interrupted
//! save never leaves a half-written document behind.
//!
//! Document shape:
//!
//! ```text
//! {
//!   "config": { "title": ..., "theme": { ... }, "output_file": ... },
//!   "links": [ { "title": ..., "url": ..., "id": ... }, ... ]
//! }
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{StorageError, StorageResult};
use crate::models::{Link, PageConfig};

/// A store document as read from disk
///
/// Keys missing from `config` take their default values; a missing `links`
/// key is kept as `None` so the caller can choose the seed links.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub config: PageConfig,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    config: &'a PageConfig,
    links: &'a [Link],
}

/// Read a store document
///
/// Returns `None` if the file doesn't exist.
/// Returns an error if the file exists but can't be read or parsed.
pub fn read_document(path: &Path) -> StorageResult<Option<StoreDocument>> {
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).map_err(|e| StorageError::from_read(e, path.to_path_buf()))?;

    let doc = serde_json::from_str(&content).map_err(|e| StorageError::InvalidFormat {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    debug!("Read store document from {:?}", path);
    Ok(Some(doc))
}

/// Serialize `config` and `links` and write them to `path`
///
/// Output is indented with two spaces and keeps non-ASCII text verbatim.
pub fn write_document(path: &Path, config: &PageConfig, links: &[Link]) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(&DocumentRef { config, links })?;
    atomic_write(path, json.as_bytes())
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
pub fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
    }

    let temp_path = temp_path_for(path);

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StorageError::AtomicWriteFailed {
            from: temp_path.clone(),
            to: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}

/// `links.json` -> `links.json.tmp`, next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".tmp");
    path.with_file_name(name)
}
