//! Git subprocess layer
//!
//! This module provides:
//! - A thin command runner wrapping `Command::new("git")`
//! - The history provider used to resolve article creation dates

pub mod error;
pub mod history;
pub mod runner;

pub use error::GitError;
pub use history::{GitHistory, HistoryProvider};
pub use runner::{run_git, run_git_bool};
