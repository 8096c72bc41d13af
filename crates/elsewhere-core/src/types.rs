//! Catalog record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Edition tag that marks a record as belonging to the older content revision
pub const LEGACY_EDITION: &str = "legacy";

/// Raw catalog entry (compatible with the exported entries.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            url: url.into(),
            edition: None,
            id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    /// True only when the edition tag is exactly `"legacy"`
    pub fn is_legacy(&self) -> bool {
        self.edition.as_deref() == Some(LEGACY_EDITION)
    }
}

/// A record with its case-normalized projections precomputed.
///
/// Built once per catalog load by [`crate::index`] and never mutated
/// afterwards; the projections are only reachable through accessors so they
/// cannot drift from the name they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedRecord {
    #[serde(flatten)]
    record: Record,
    #[serde(skip)]
    name_lower: String,
    #[serde(skip)]
    category_lower: String,
    #[serde(skip)]
    name_words: Vec<String>,
}

impl IndexedRecord {
    pub(crate) fn from_parts(
        record: Record,
        name_lower: String,
        category_lower: String,
        name_words: Vec<String>,
    ) -> Self {
        Self {
            record,
            name_lower,
            category_lower,
            name_words,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }

    pub fn url(&self) -> &str {
        &self.record.url
    }

    pub fn edition(&self) -> Option<&str> {
        self.record.edition.as_deref()
    }

    pub fn is_legacy(&self) -> bool {
        self.record.is_legacy()
    }

    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    pub fn category_lower(&self) -> &str {
        &self.category_lower
    }

    pub fn name_words(&self) -> &[String] {
        &self.name_words
    }
}

/// A record paired with its total score for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a IndexedRecord,
    pub score: i32,
}
