//! Record indexing: precompute the lowercase projections used by scoring

use crate::types::{IndexedRecord, Record};

/// Index a whole catalog, preserving input order
pub fn index(records: Vec<Record>) -> Vec<IndexedRecord> {
    let indexed: Vec<IndexedRecord> = records.into_iter().map(index_record).collect();
    tracing::debug!(records = indexed.len(), "indexed catalog");
    indexed
}

/// Index a single record. Blank names produce an empty word list.
pub fn index_record(record: Record) -> IndexedRecord {
    let name_lower = record.name.to_lowercase();
    let category_lower = record.category.to_lowercase();
    let name_words = tokenize(&name_lower);
    IndexedRecord::from_parts(record, name_lower, category_lower, name_words)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

impl From<Record> for IndexedRecord {
    fn from(record: Record) -> Self {
        index_record(record)
    }
}
