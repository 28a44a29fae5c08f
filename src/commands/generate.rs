//! Generate command: build the article index and write the manifest.
//! Usage: mdindex

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::git::GitHistory;
use crate::index::{build_index, write_manifest};

/// Execute the generate command against the current working directory.
pub fn execute() -> Result<()> {
    let root = std::env::current_dir().context("Failed to resolve current directory")?;
    execute_in(&root)
}

/// Build and write the index for the tree rooted at `root`.
///
/// Fails before touching the manifest when `root` is not inside a git
/// work tree.
pub fn execute_in(root: &Path) -> Result<()> {
    let history = GitHistory::open(root)?;

    let records = build_index(root, &history)?;
    let manifest = write_manifest(&records, root)?;

    println!(
        "{} {} article(s) to {}",
        "Indexed".green().bold(),
        records.len(),
        manifest.display()
    );

    let missing = records.iter().filter(|r| r.created.is_empty()).count();
    if missing > 0 {
        eprintln!("  Warning: {missing} article(s) have no history entry");
    }

    Ok(())
}
