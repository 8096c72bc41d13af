//! Relevance signals.
//!
//! Every signal takes the normalized (trimmed, lowercased) query and an
//! indexed record and returns an integer contribution, 0 when it does not
//! apply. Content signals make up the match score; modifiers only apply once
//! the match score is positive.

use crate::types::IndexedRecord;

pub const EXACT_MATCH: i32 = 100;
pub const PREFIX_MATCH: i32 = 50;
pub const MULTI_WORD_MATCH: i32 = 40;
pub const WORD_START_MATCH: i32 = 30;
pub const SUBSTRING_MATCH: i32 = 15;

/// Bonus for any edition other than legacy
pub const CURRENT_EDITION_BONUS: i32 = 2;

/// A single scoring signal
pub type Signal = fn(&str, &IndexedRecord) -> i32;

/// Signals that decide whether a record matches at all
pub const MATCH_SIGNALS: &[Signal] = &[
    score_exact_match,
    score_prefix_match,
    score_multi_word_match,
    score_word_start_match,
    score_substring_match,
];

/// Tie-break modifiers, applied only to matching records
pub const MODIFIERS: &[Signal] = &[score_category_boost, score_name_length, score_edition];

pub fn score_exact_match(query: &str, record: &IndexedRecord) -> i32 {
    if query == record.name_lower() {
        EXACT_MATCH
    } else {
        0
    }
}

pub fn score_prefix_match(query: &str, record: &IndexedRecord) -> i32 {
    if record.name_lower().starts_with(query) {
        PREFIX_MATCH
    } else {
        0
    }
}

/// All space-separated query words appear somewhere in the name.
/// Single-word queries never score here.
pub fn score_multi_word_match(query: &str, record: &IndexedRecord) -> i32 {
    let words: Vec<&str> = query.split(' ').filter(|w| !w.is_empty()).collect();
    if words.len() < 2 {
        return 0;
    }
    if words.iter().all(|w| record.name_lower().contains(w)) {
        MULTI_WORD_MATCH
    } else {
        0
    }
}

/// Some word of the name starts with the whole query
pub fn score_word_start_match(query: &str, record: &IndexedRecord) -> i32 {
    if record.name_words().iter().any(|w| w.starts_with(query)) {
        WORD_START_MATCH
    } else {
        0
    }
}

pub fn score_substring_match(query: &str, record: &IndexedRecord) -> i32 {
    if record.name_lower().contains(query) {
        SUBSTRING_MATCH
    } else {
        0
    }
}

/// Fixed per-category boost, independent of the query
pub fn score_category_boost(_query: &str, record: &IndexedRecord) -> i32 {
    match record.category_lower() {
        "class" => 10,
        "spell" => 5,
        "feat" | "species" => 3,
        _ => 0,
    }
}

/// Shorter names rank higher among otherwise equal matches
pub fn score_name_length(_query: &str, record: &IndexedRecord) -> i32 {
    match record.name().chars().count() {
        0..=5 => -1,
        6..=10 => -2,
        11..=20 => -3,
        21..=30 => -4,
        _ => -5,
    }
}

pub fn score_edition(_query: &str, record: &IndexedRecord) -> i32 {
    if record.is_legacy() {
        0
    } else {
        CURRENT_EDITION_BONUS
    }
}

/// Sum of the content signals
pub fn match_score(query: &str, record: &IndexedRecord) -> i32 {
    MATCH_SIGNALS.iter().map(|signal| signal(query, record)).sum()
}

/// Total score for a record, or 0 when no content signal matched.
///
/// Modifiers are never added to a zero match score, so a category boost
/// cannot promote a non-match and a length penalty cannot push a match below
/// zero (the smallest positive match score outweighs every penalty).
pub fn score_record(query: &str, record: &IndexedRecord) -> i32 {
    let matched = match_score(query, record);
    if matched == 0 {
        return 0;
    }
    matched
        + MODIFIERS
            .iter()
            .map(|modifier| modifier(query, record))
            .sum::<i32>()
}
