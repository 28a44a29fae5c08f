//! Git command runner
//!
//! Centralized functions for running git commands with consistent error
//! handling, reducing boilerplate across the git layer.

use std::path::Path;
use std::process::{Command, Output};

use super::error::GitError;

/// Run a git command and return the raw Output.
///
/// Wraps `Command::new("git")` with `current_dir`. Spawn failure is the
/// only error here; a non-zero exit is left to the caller, which may
/// treat it as recoverable.
///
/// # Arguments
/// * `args` - Git command arguments (e.g., `&["rev-parse", "HEAD"]`)
/// * `repo_root` - Working directory for the git command
pub fn run_git(args: &[&str], repo_root: &Path) -> Result<Output, GitError> {
    Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .map_err(|source| GitError::Spawn {
            command: args.join(" "),
            source,
        })
}

/// Run a git command and return true if exit code is 0.
///
/// Silently swallows errors (both spawn failures and non-zero exits).
/// Use this for status checks like `rev-parse --is-inside-work-tree`.
pub fn run_git_bool(args: &[&str], repo_root: &Path) -> bool {
    run_git(args, repo_root)
        .map(|output| output.status.success())
        .unwrap_or(false)
}
