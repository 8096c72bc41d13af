//! Query ranking: score, filter, stable sort, top-K

use crate::scoring::score_record;
use crate::types::{IndexedRecord, ScoredCandidate};

/// Maximum number of results returned by a search
pub const MAX_RESULTS: usize = 20;

/// Trim whitespace and byte-order marks, then lowercase a raw query
pub fn normalize_query(query: &str) -> String {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_lowercase()
}

/// Rank `records` against `query`.
///
/// Returns at most [`MAX_RESULTS`] records by descending score; equal scores
/// keep catalog order. An empty (or whitespace-only) query matches nothing.
/// With `include_legacy` false, records tagged `"legacy"` are skipped.
pub fn search<'a>(
    query: &str,
    records: &'a [IndexedRecord],
    include_legacy: bool,
) -> Vec<&'a IndexedRecord> {
    search_scored(query, records, include_legacy)
        .into_iter()
        .map(|candidate| candidate.record)
        .collect()
}

/// Same ranking as [`search`], keeping each record's total score
pub fn search_scored<'a>(
    query: &str,
    records: &'a [IndexedRecord],
    include_legacy: bool,
) -> Vec<ScoredCandidate<'a>> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate<'a>> = records
        .iter()
        .filter(|record| include_legacy || !record.is_legacy())
        .filter_map(|record| {
            let score = score_record(&query, record);
            (score > 0).then_some(ScoredCandidate { record, score })
        })
        .collect();

    // sort_by is stable: ties keep catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    let matched = scored.len();
    scored.truncate(MAX_RESULTS);

    tracing::trace!(
        query = %query,
        matched,
        returned = scored.len(),
        "ranked query"
    );
    scored
}
