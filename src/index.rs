//! Index builder
//!
//! Ties discovery and history queries together: enumerate articles,
//! resolve each creation date, sort newest first, write the manifest.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::discover::discover_articles;
use crate::git::HistoryProvider;
use crate::models::ArticleRecord;

/// Manifest filename, written at the root of the scanned tree.
pub const MANIFEST_FILENAME: &str = "index.json";

/// Build the sorted article index for the tree rooted at `root`.
///
/// Queries the history provider once per discovered file, strictly in
/// sequence. A file without a history entry is kept with an empty
/// `created` field rather than aborting the run.
pub fn build_index(root: &Path, history: &dyn HistoryProvider) -> Result<Vec<ArticleRecord>> {
    let mut records = Vec::new();

    for filename in discover_articles(root)? {
        let created = history
            .earliest_addition_date(&filename)
            .with_context(|| format!("Failed to query history for {filename}"))?
            .unwrap_or_default();

        if created.is_empty() {
            warn!(%filename, "no creation date in history");
        }

        records.push(ArticleRecord { filename, created });
    }

    records.sort_by(ArticleRecord::manifest_order);
    Ok(records)
}

/// Serialize `records` and overwrite the manifest at the scan root.
///
/// The write happens once, at the very end of a run; an interrupted run
/// leaves the previous manifest in place.
pub fn write_manifest(records: &[ArticleRecord], root: &Path) -> Result<PathBuf> {
    let path = root.join(MANIFEST_FILENAME);

    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize article index")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(path)
}
