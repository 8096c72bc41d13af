pub mod coverage;
pub mod export;
pub mod legacy;
pub mod search;
pub mod stats;

use anyhow::Context;
use elsewhere_catalog::Settings;
use std::path::PathBuf;

/// Settings with the catalog and overrides flags applied
fn settings(catalog: Option<PathBuf>, overrides: Option<PathBuf>) -> anyhow::Result<Settings> {
    let settings = Settings::load().context("failed to resolve data directory")?;
    Ok(settings.with_catalog(catalog).with_overrides(overrides))
}
