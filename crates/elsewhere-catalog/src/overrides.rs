//! Hand-maintained catalog edits, applied on top of a catalog before export

use crate::error::{CatalogError, Result};
use elsewhere_core::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideAction {
    Add,
    Update,
    Delete,
}

impl OverrideAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action.trim() {
            "add" => Some(Self::Add),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// One row of an overrides file. Blank fields count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub action: String,
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
}

impl Override {
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new(
            Self::field(&self.name).unwrap_or_default(),
            Self::field(&self.category).unwrap_or_default(),
            self.url.trim(),
        );
        record.edition = Self::field(&self.edition).map(str::to_string);
        record
    }
}

/// Load overrides from a CSV file with an `action,url,name,category,edition`
/// header, dropping rows with an unknown action. A missing file yields no
/// overrides.
pub fn load_overrides(path: &Path) -> Result<Vec<Override>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let malformed = |source: csv::Error, fallback: u64| CatalogError::Override {
        path: path.to_path_buf(),
        line: source.position().map_or(fallback, csv::Position::line),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(|e| malformed(e, 1))?.clone();
    let mut row = csv::StringRecord::new();
    let mut overrides = Vec::new();

    loop {
        match reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(malformed(e, reader.position().line())),
        }
        let line = row.position().map_or(0, csv::Position::line);
        let o: Override = row
            .deserialize(Some(&headers))
            .map_err(|e| malformed(e, line))?;

        if OverrideAction::parse(&o.action).is_some() {
            overrides.push(o);
        } else {
            tracing::warn!(
                path = %path.display(),
                line,
                action = %o.action,
                "skipping override with unknown action"
            );
        }
    }

    tracing::debug!(path = %path.display(), overrides = overrides.len(), "loaded overrides");
    Ok(overrides)
}

/// Apply overrides keyed by URL and return the merged catalog sorted by
/// lowercase name (ties keep first-seen order).
///
/// - `delete` removes the URL if present
/// - `add` inserts, replacing any record with the same URL
/// - `update` overwrites only non-blank fields; an unknown URL is added
pub fn apply_overrides(records: Vec<Record>, overrides: &[Override]) -> Vec<Record> {
    let mut seq = 0usize;
    let mut by_url: HashMap<String, (usize, Record)> = HashMap::with_capacity(records.len());
    let mut insert = |by_url: &mut HashMap<String, (usize, Record)>, record: Record| {
        match by_url.get_mut(&record.url) {
            Some(slot) => slot.1 = record,
            None => {
                by_url.insert(record.url.clone(), (seq, record));
                seq += 1;
            }
        }
    };

    for record in records {
        insert(&mut by_url, record);
    }

    for o in overrides {
        let Some(action) = OverrideAction::parse(&o.action) else {
            continue;
        };
        let url = o.url.trim();
        match action {
            OverrideAction::Delete => {
                by_url.remove(url);
            }
            OverrideAction::Add => insert(&mut by_url, o.to_record()),
            OverrideAction::Update => match by_url.get_mut(url) {
                Some((_, record)) => {
                    if let Some(name) = Override::field(&o.name) {
                        record.name = name.to_string();
                    }
                    if let Some(category) = Override::field(&o.category) {
                        record.category = category.to_string();
                    }
                    if let Some(edition) = Override::field(&o.edition) {
                        record.edition = Some(edition.to_string());
                    }
                }
                None => insert(&mut by_url, o.to_record()),
            },
        }
    }

    let mut merged: Vec<(usize, Record)> = by_url.into_values().collect();
    merged.sort_by_cached_key(|(seq, record)| (record.name.to_lowercase(), *seq));
    merged.into_iter().map(|(_, record)| record).collect()
}
