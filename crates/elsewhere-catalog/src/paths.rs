//! Path resolution for catalog and preference files

use crate::error::{CatalogError, Result};
use std::path::PathBuf;

/// Overrides the data directory (defaults to `~/.elsewhere`)
pub const HOME_ENV: &str = "ELSEWHERE_HOME";

/// Resolves standard paths under the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve from `ELSEWHERE_HOME`, falling back to the home directory
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_data_dir(dir));
        }

        let home = dirs::home_dir().ok_or(CatalogError::HomeNotFound)?;
        Ok(Self::with_data_dir(home.join(".elsewhere")))
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Default catalog file
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("entries.json")
    }

    /// Default overrides file
    pub fn overrides_file(&self) -> PathBuf {
        self.data_dir.join("overrides.csv")
    }

    pub fn prefs_file(&self) -> PathBuf {
        self.data_dir.join("prefs.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_file_names() {
        let paths = Paths::with_data_dir("/tmp/elsewhere");
        assert!(paths.catalog_file().ends_with("elsewhere/entries.json"));
        assert!(paths.overrides_file().ends_with("overrides.csv"));
        assert!(paths.prefs_file().ends_with("prefs.json"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var(HOME_ENV, "/tmp/elsewhere-test");
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_ENV);
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/elsewhere-test"));
    }

    #[test]
    #[serial]
    fn test_default_under_home() {
        std::env::remove_var(HOME_ENV);
        let paths = Paths::new().unwrap();
        assert!(paths.data_dir.ends_with(".elsewhere"));
    }
}
