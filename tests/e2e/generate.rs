//! End-to-end tests for the full index generation flow.

use std::fs;

use tempfile::TempDir;

use mdindex::commands::generate;
use mdindex::index::MANIFEST_FILENAME;

use super::helpers::{commit_file, create_temp_git_repo, read_manifest, write_file};

#[test]
fn test_index_sorted_newest_first() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "a.md", "2023-01-01T00:00:00+00:00").unwrap();
    commit_file(repo.path(), "b.md", "2024-06-15T12:00:00+00:00").unwrap();
    commit_file(repo.path(), "README.md", "2024-01-01T00:00:00+00:00").unwrap();

    generate::execute_in(repo.path()).unwrap();

    let records = read_manifest(repo.path()).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["b.md", "a.md"]);
    assert!(records[0].created.starts_with("2024-06-15T12:00:00"));
    assert!(records[1].created.starts_with("2023-01-01T00:00:00"));
}

#[test]
fn test_readme_excluded_at_any_depth() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "README.md", "2023-01-01T00:00:00+00:00").unwrap();
    commit_file(repo.path(), "docs/README.md", "2023-02-01T00:00:00+00:00").unwrap();
    commit_file(repo.path(), "docs/guide.md", "2023-03-01T00:00:00+00:00").unwrap();

    generate::execute_in(repo.path()).unwrap();

    let records = read_manifest(repo.path()).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["docs/guide.md"]);
}

#[test]
fn test_node_modules_excluded() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "a.md", "2023-01-01T00:00:00+00:00").unwrap();
    commit_file(
        repo.path(),
        "node_modules/pkg/CHANGELOG.md",
        "2023-02-01T00:00:00+00:00",
    )
    .unwrap();

    generate::execute_in(repo.path()).unwrap();

    let records = read_manifest(repo.path()).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, ["a.md"]);
}

#[test]
fn test_untracked_file_gets_empty_created() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "tracked.md", "2023-01-01T00:00:00+00:00").unwrap();
    write_file(repo.path(), "untracked.md").unwrap();

    generate::execute_in(repo.path()).unwrap();

    let records = read_manifest(repo.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].filename, "tracked.md");
    assert_eq!(records[1].filename, "untracked.md");
    assert_eq!(records[1].created, "");
}

#[test]
fn test_manifest_never_lists_itself() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "a.md", "2023-01-01T00:00:00+00:00").unwrap();

    generate::execute_in(repo.path()).unwrap();
    // second run discovers the tree with the manifest already present
    generate::execute_in(repo.path()).unwrap();

    let records = read_manifest(repo.path()).unwrap();
    assert!(records.iter().all(|r| r.filename != MANIFEST_FILENAME));
}

#[test]
fn test_rerun_without_history_changes_is_byte_identical() {
    let repo = create_temp_git_repo().unwrap();
    commit_file(repo.path(), "a.md", "2023-01-01T00:00:00+00:00").unwrap();
    commit_file(repo.path(), "b.md", "2024-06-15T12:00:00+00:00").unwrap();

    generate::execute_in(repo.path()).unwrap();
    let first = fs::read(repo.path().join(MANIFEST_FILENAME)).unwrap();

    generate::execute_in(repo.path()).unwrap();
    let second = fs::read(repo.path().join(MANIFEST_FILENAME)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fails_outside_git_work_tree() {
    let tree = TempDir::new().unwrap();
    write_file(tree.path(), "a.md").unwrap();

    let result = generate::execute_in(tree.path());

    assert!(result.is_err());
    assert!(!tree.path().join(MANIFEST_FILENAME).exists());
}
