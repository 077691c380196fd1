//! Atomicity guarantees of `FileStore::atomic_write`.
//!
//! These tests simulate failures at each step before the rename and
//! assert the one invariant that matters: the live file still holds its
//! pre-write content. Unit tests in `src/store.rs` cover the happy
//! paths; this suite covers the crash contract.

use stockroom_durability::{FileStore, StoreError};
use tempfile::TempDir;

#[test]
fn failed_temp_write_leaves_live_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    let store = FileStore::new(&path);

    store.atomic_write("original content").unwrap();

    // Occupy the temp path with a non-empty directory: the stale-temp
    // cleanup cannot remove it and the temp create fails, which stands
    // in for an interruption during step (3) of the write sequence.
    let temp = dir.path().join("data.csv.tmp");
    std::fs::create_dir(&temp).unwrap();
    std::fs::write(temp.join("occupied"), "x").unwrap();

    let result = store.atomic_write("replacement that must not land");
    assert!(matches!(result, Err(StoreError::WriteFailed { .. })));

    assert_eq!(store.read_all().unwrap(), "original content");
}

#[test]
fn failed_backup_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    let store = FileStore::new(&path);

    store.atomic_write("original content").unwrap();

    // A directory at the backup path makes the copy fail. The write
    // must abort before the temp file is even created: overwriting
    // without a backup would discard the only safety net.
    std::fs::create_dir(dir.path().join("data.csv.bak")).unwrap();

    let result = store.atomic_write("new content");
    assert!(matches!(result, Err(StoreError::BackupFailed { .. })));

    assert_eq!(store.read_all().unwrap(), "original content");
    assert!(!dir.path().join("data.csv.tmp").exists());
}

#[test]
fn successful_overwrite_commits_content_and_backup_exactly() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data.csv"));

    store.atomic_write("generation 1").unwrap();
    store.atomic_write("generation 2").unwrap();

    assert_eq!(store.read_all().unwrap(), "generation 2");
    assert_eq!(
        std::fs::read_to_string(store.backup_path()).unwrap(),
        "generation 1"
    );
    assert!(!dir.path().join("data.csv.tmp").exists());
}

#[test]
fn checksum_of_committed_content_matches_recomputation() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data.csv"));

    let content = "id,name,quantity,location\n7,Widget,10,A1\n";
    let before = FileStore::compute_checksum(content);

    store.atomic_write(content).unwrap();
    let after = FileStore::compute_checksum(&store.read_all().unwrap());

    assert_eq!(before, after);
}
