//! Immutable, shareable catalog snapshot

use crate::indexer::index;
use crate::ranker::{search, search_scored};
use crate::types::{IndexedRecord, Record, ScoredCandidate};
use std::sync::Arc;

/// One indexed catalog load.
///
/// Clones share the same records. Reloading means building a new `Catalog`;
/// holders of the previous one keep searching their own snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[IndexedRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: index(records).into(),
        }
    }

    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search(&self, query: &str, include_legacy: bool) -> Vec<&IndexedRecord> {
        search(query, &self.records, include_legacy)
    }

    pub fn search_scored(&self, query: &str, include_legacy: bool) -> Vec<ScoredCandidate<'_>> {
        search_scored(query, &self.records, include_legacy)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_catalog_search() {
        let catalog: Catalog = [
            Record::new("Wizard", "Class", "w"),
            Record::new("Red Wizard", "Monster", "r"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.search("wizard", true)[0].name(), "Wizard");
    }

    #[test]
    fn test_reload_leaves_old_snapshot_intact() {
        let old = Catalog::new(vec![Record::new("Fireball", "Spell", "old")]);
        let held = old.clone();

        let reloaded = Catalog::new(vec![Record::new("Fire Bolt", "Spell", "new")]);

        assert_eq!(held.search("fire", true)[0].url(), "old");
        assert_eq!(reloaded.search("fire", true)[0].url(), "new");
    }

    #[test]
    fn test_concurrent_searches_agree() {
        let catalog = Catalog::new(
            (0..200)
                .map(|i| Record::new(format!("Goblin {i}"), "Monster", format!("u{i}")))
                .collect(),
        );
        let expected: Vec<String> = catalog
            .search("goblin 1", true)
            .iter()
            .map(|r| r.url().to_string())
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = catalog.clone();
                thread::spawn(move || {
                    catalog
                        .search("goblin 1", true)
                        .iter()
                        .map(|r| r.url().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.search("anything", true).is_empty());
    }
}
