//! Manifest records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry in the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Path relative to the scan root, without a leading `./`.
    pub filename: String,
    /// Author-date of the file's earliest addition (ISO-8601 with
    /// offset), or `""` when the file has no history entry.
    pub created: String,
}

impl ArticleRecord {
    fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created).ok()
    }

    /// Manifest ordering: newest `created` first. Records whose
    /// `created` is empty or unparseable sort after every dated record.
    /// Ties break by `filename` ascending so repeated runs over
    /// unchanged history produce identical output.
    pub fn manifest_order(a: &Self, b: &Self) -> Ordering {
        match (a.created_at(), b.created_at()) {
            (Some(a_date), Some(b_date)) => b_date
                .cmp(&a_date)
                .then_with(|| a.filename.cmp(&b.filename)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.filename.cmp(&b.filename),
        }
    }
}
