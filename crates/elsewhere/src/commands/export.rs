use anyhow::Context;
use elsewhere_catalog::{apply_overrides, load_catalog, load_overrides, write_catalog};
use std::path::{Path, PathBuf};

pub fn run(catalog: Option<PathBuf>, overrides: Option<PathBuf>, out: &Path) -> anyhow::Result<()> {
    let settings = super::settings(catalog, overrides)?;

    println!("Loading catalog from {}...", settings.catalog.display());
    let records = load_catalog(&settings.catalog)
        .with_context(|| format!("failed to load catalog {}", settings.catalog.display()))?;
    println!("  {} entries loaded", records.len());

    println!("Loading overrides from {}...", settings.overrides.display());
    let overrides = load_overrides(&settings.overrides)?;
    println!("  {} overrides found", overrides.len());

    let merged = apply_overrides(records, &overrides);
    println!("  {} entries after applying overrides", merged.len());

    write_catalog(out, &merged).with_context(|| format!("failed to write {}", out.display()))?;
    println!("Written to {}", out.display());
    Ok(())
}
