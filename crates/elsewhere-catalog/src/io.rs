//! Catalog JSON I/O and atomic file operations

use crate::error::{CatalogError, Result};
use elsewhere_core::Record;
use serde::Serialize;
use std::path::Path;

/// Read a catalog file (a JSON array of records)
pub fn load_catalog(path: &Path) -> Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let records: Vec<Record> =
        serde_json::from_str(&contents).map_err(|e| CatalogError::json(path, e))?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}

/// The published shape of a record. Bookkeeping fields stay behind.
#[derive(Serialize)]
struct PublishedRecord<'a> {
    name: &'a str,
    category: &'a str,
    url: &'a str,
    edition: Option<&'a str>,
}

impl<'a> From<&'a Record> for PublishedRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            name: &record.name,
            category: &record.category,
            url: &record.url,
            edition: record.edition.as_deref(),
        }
    }
}

/// Write a catalog as compact JSON, atomically. Only `name`, `category`,
/// `url` and `edition` are written.
pub fn write_catalog(path: &Path, records: &[Record]) -> Result<()> {
    let published: Vec<PublishedRecord<'_>> = records.iter().map(PublishedRecord::from).collect();
    let json = serde_json::to_vec(&published).map_err(|e| CatalogError::json(path, e))?;
    atomic_write(path, &json)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data).map_err(|e| CatalogError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| CatalogError::io(path, e))?;
    Ok(())
}
