//! Storage layer
//!
//! The store is persisted as one pretty-printed JSON document with two
//! top-level keys, `config` and `links`. All files are written atomically
//! (temp file, then rename).

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{atomic_write, read_document, write_document, StoreDocument};
