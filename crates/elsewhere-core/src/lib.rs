//! Catalog indexing and relevance ranking

mod catalog;
mod indexer;
mod ranker;
pub mod scoring;
mod types;

pub use catalog::Catalog;
pub use indexer::{index, index_record};
pub use ranker::{normalize_query, search, search_scored, MAX_RESULTS};
pub use types::{IndexedRecord, Record, ScoredCandidate, LEGACY_EDITION};
