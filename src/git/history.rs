//! Article creation dates from git history.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::GitError;
use super::runner::{run_git, run_git_bool};

/// Resolves the creation date of a file from version-control history.
///
/// The real implementation shells out to git; tests substitute a canned
/// provider so the index builder can be exercised without a repository.
pub trait HistoryProvider {
    /// Author-date timestamp (ISO-8601 with offset) of the earliest
    /// recorded addition of `path`, following renames, or `None` when
    /// the path has no history entry.
    fn earliest_addition_date(&self, path: &str) -> Result<Option<String>>;
}

/// History provider backed by the `git` binary.
pub struct GitHistory {
    repo_root: PathBuf,
}

impl GitHistory {
    /// Open the history of the repository containing `root`.
    ///
    /// Fails when `root` is not inside a git work tree. This is the
    /// fatal precondition for an index run; per-file lookups never
    /// abort the run.
    pub fn open(root: &Path) -> Result<Self, GitError> {
        if !run_git_bool(&["rev-parse", "--is-inside-work-tree"], root) {
            return Err(GitError::NotARepository {
                root: root.to_path_buf(),
            });
        }

        Ok(Self {
            repo_root: root.to_path_buf(),
        })
    }
}

impl HistoryProvider for GitHistory {
    fn earliest_addition_date(&self, path: &str) -> Result<Option<String>> {
        let output = run_git(
            &["log", "--diff-filter=A", "--follow", "--format=%aI", "--", path],
            &self.repo_root,
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(path, stderr = %stderr.trim(), "history query failed, treating as untracked");
            return Ok(None);
        }

        // git lists addition events newest first; a deleted-and-re-added
        // file has several, and the last line is the original one
        let stdout = String::from_utf8_lossy(&output.stdout);
        let earliest = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .map(String::from);

        debug!(path, date = earliest.as_deref().unwrap_or(""), "resolved creation date");
        Ok(earliest)
    }
}
