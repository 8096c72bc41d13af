//! Catalog statistics and coverage against a reference list

use elsewhere_core::Record;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub legacy: usize,
    pub current: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn from_records(records: &[Record]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            if record.is_legacy() {
                stats.legacy += 1;
            } else {
                stats.current += 1;
            }
            *stats.by_category.entry(record.category.clone()).or_default() += 1;
        }
        stats
    }
}

/// Which side of the edition split to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionFilter {
    Legacy,
    Current,
}

impl EditionFilter {
    fn accepts(self, record: &Record) -> bool {
        match self {
            Self::Legacy => record.is_legacy(),
            Self::Current => !record.is_legacy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRow {
    pub category: String,
    pub covered: usize,
    pub total: usize,
    pub missing: Vec<String>,
}

impl CoverageRow {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.covered as f64 / self.total as f64 * 100.0
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Per-category coverage of `reference` names by `catalog`.
///
/// Names compare trimmed and lowercased within the same category. Rows follow
/// the order categories first appear in `reference`.
pub fn coverage(
    catalog: &[Record],
    reference: &[Record],
    edition: Option<EditionFilter>,
) -> Vec<CoverageRow> {
    let mut ours: HashMap<&str, HashSet<String>> = HashMap::new();
    for record in catalog
        .iter()
        .filter(|r| edition.map_or(true, |e| e.accepts(r)))
    {
        ours.entry(record.category.as_str())
            .or_default()
            .insert(normalize(&record.name));
    }

    let mut rows: Vec<CoverageRow> = Vec::new();
    for record in reference {
        let idx = match rows.iter().position(|row| row.category == record.category) {
            Some(idx) => idx,
            None => {
                rows.push(CoverageRow {
                    category: record.category.clone(),
                    covered: 0,
                    total: 0,
                    missing: Vec::new(),
                });
                rows.len() - 1
            }
        };
        let row = &mut rows[idx];
        row.total += 1;

        let present = ours
            .get(record.category.as_str())
            .is_some_and(|names| names.contains(&normalize(&record.name)));
        if present {
            row.covered += 1;
        } else {
            row.missing.push(record.name.clone());
        }
    }

    rows
}
