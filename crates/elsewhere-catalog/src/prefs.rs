//! Persisted user preferences

use crate::error::{CatalogError, Result};
use crate::io::atomic_write;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Include legacy-edition records in search results
    #[serde(default = "default_show_legacy")]
    pub show_legacy: bool,
}

fn default_show_legacy() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_legacy: default_show_legacy(),
        }
    }
}

impl Preferences {
    /// Load preferences; a missing or unreadable file yields the defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path)
            .ok()
            .and_then(|c| serde_json::from_str(&c).ok())
        {
            Some(prefs) => prefs,
            None => {
                tracing::warn!(path = %path.display(), "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| CatalogError::json(path, e))?;
        atomic_write(path, json.as_bytes())
    }
}
