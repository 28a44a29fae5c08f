//! Typed errors for the git layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by git subprocess invocations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be spawned at all.
    #[error("Failed to execute: git {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The scan root is not inside a git work tree.
    #[error("Not inside a git work tree: {root}")]
    NotARepository { root: PathBuf },
}
