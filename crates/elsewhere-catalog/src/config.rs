//! Resolved settings: defaults, then preferences, then environment.
//! Command-line flags are layered on top by the caller.

use crate::error::Result;
use crate::paths::Paths;
use crate::prefs::Preferences;
use std::path::PathBuf;

pub const CATALOG_ENV: &str = "ELSEWHERE_CATALOG";
pub const OVERRIDES_ENV: &str = "ELSEWHERE_OVERRIDES";

#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: Paths,
    /// Catalog file to search
    pub catalog: PathBuf,
    /// Overrides applied on load, when the file exists
    pub overrides: PathBuf,
    /// Default for including legacy records when no flag is given
    pub show_legacy: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Ok(Self::from_paths(Paths::new()?))
    }

    pub fn from_paths(paths: Paths) -> Self {
        let prefs = Preferences::load(&paths.prefs_file());
        let catalog = env_path(CATALOG_ENV).unwrap_or_else(|| paths.catalog_file());
        let overrides = env_path(OVERRIDES_ENV).unwrap_or_else(|| paths.overrides_file());

        Self {
            paths,
            catalog,
            overrides,
            show_legacy: prefs.show_legacy,
        }
    }

    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog = path;
        }
        self
    }

    pub fn with_overrides(mut self, overrides: Option<PathBuf>) -> Self {
        if let Some(path) = overrides {
            self.overrides = path;
        }
        self
    }

    pub fn with_show_legacy(mut self, show_legacy: Option<bool>) -> Self {
        if let Some(show) = show_legacy {
            self.show_legacy = show;
        }
        self
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
