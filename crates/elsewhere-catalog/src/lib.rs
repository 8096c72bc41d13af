//! Catalog files, overrides, preferences and reports around the search core

mod config;
mod error;
mod io;
mod overrides;
mod paths;
mod prefs;
mod stats;

pub use config::{Settings, CATALOG_ENV, OVERRIDES_ENV};
pub use error::{CatalogError, Result};
pub use io::{atomic_write, load_catalog, write_catalog};
pub use overrides::{apply_overrides, load_overrides, Override, OverrideAction};
pub use paths::{Paths, HOME_ENV};
pub use prefs::Preferences;
pub use stats::{coverage, CatalogStats, CoverageRow, EditionFilter};

use elsewhere_core::Record;
use std::path::Path;

/// Load a catalog and apply the overrides file on top of it
pub fn load_merged(catalog: &Path, overrides: &Path) -> Result<Vec<Record>> {
    let records = load_catalog(catalog)?;
    let overrides = load_overrides(overrides)?;
    if overrides.is_empty() {
        return Ok(records);
    }
    Ok(apply_overrides(records, &overrides))
}
