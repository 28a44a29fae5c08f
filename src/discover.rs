//! Markdown article discovery.

use anyhow::{Context, Result};
use glob::glob;
use std::path::Path;

use crate::index::MANIFEST_FILENAME;

/// Path segment used for vendored third-party packages; nothing below
/// one is an article.
const DEPENDENCY_DIR: &str = "node_modules";

/// Recursively collect the relative paths of all Markdown articles
/// under `root`.
///
/// Excluded from the result:
/// - `README.md` at any nesting depth (suffix match)
/// - the manifest itself (suffix match)
/// - anything under a `node_modules` directory
///
/// Order is unspecified; the index builder sorts.
pub fn discover_articles(root: &Path) -> Result<Vec<String>> {
    let pattern = root.join("**").join("*.md");
    let pattern = pattern.to_string_lossy().into_owned();

    let mut articles = Vec::new();

    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
        let path = entry.context("Failed to read a discovery match")?;
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path);
        let lossy = relative.to_string_lossy();
        let name = lossy.strip_prefix("./").unwrap_or(&lossy);

        if is_excluded(name) {
            continue;
        }

        articles.push(name.to_string());
    }

    Ok(articles)
}

fn is_excluded(relative: &str) -> bool {
    relative.ends_with("README.md")
        || relative.ends_with(MANIFEST_FILENAME)
        || relative.contains(DEPENDENCY_DIR)
}
