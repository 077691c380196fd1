//! Crash-safe single-file storage.
//!
//! [`FileStore`] owns one flat data file and makes its content durable
//! across the sequence {validate path, backup, write temp, rename}:
//!
//! 1. If a live file exists it is copied to `<path>.bak` first; a
//!    backup failure aborts the write entirely.
//! 2. The new content is written in full to `<path>.tmp` and synced.
//! 3. The temp file is renamed onto the live path (atomic on POSIX).
//!
//! Only the rename mutates the live file, so an interruption at any
//! earlier step leaves the previous content untouched; a partially
//! written temp file is orphaned garbage, never the live path.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use stockroom_core::{StoreError, StoreResult};

/// Durable store for a single flat file.
///
/// The data file is exclusively owned by one `FileStore` instance per
/// process; no file locking is implemented or required.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The configured data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The backup sibling: `<path>.bak`.
    pub fn backup_path(&self) -> PathBuf {
        Self::with_suffix(&self.path, ".bak")
    }

    fn temp_path(&self) -> PathBuf {
        Self::with_suffix(&self.path, ".tmp")
    }

    // Appends to the full file name rather than replacing the
    // extension, so "data.csv" becomes "data.csv.tmp".
    fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
        let mut os = path.as_os_str().to_os_string();
        os.push(suffix);
        PathBuf::from(os)
    }

    fn validate_path(&self) -> StoreResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(StoreError::InvalidPath {
                reason: "file path is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Create an empty file at the path if absent.
    ///
    /// Idempotent: calling twice when the file exists is a no-op
    /// success. Fails if the containing directory does not exist or is
    /// not writable.
    pub fn initialize(&self) -> StoreResult<()> {
        self.validate_path()?;

        if self.path.exists() {
            debug!(path = %self.path.display(), "Store file already present");
            return Ok(());
        }

        File::create(&self.path).map_err(|e| StoreError::CreateFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;

        info!(path = %self.path.display(), "Created empty store file");
        Ok(())
    }

    /// Replace the file's content atomically.
    ///
    /// On success the file holds exactly `content` and `<path>.bak`
    /// holds the immediately-prior content (if there was one). On any
    /// failure the live file is unchanged.
    pub fn atomic_write(&self, content: &str) -> StoreResult<()> {
        self.validate_path()?;

        if self.path.exists() {
            std::fs::copy(&self.path, self.backup_path()).map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Backup failed, aborting write");
                StoreError::BackupFailed {
                    path: self.path.display().to_string(),
                    source: e,
                }
            })?;
        }

        let temp = self.temp_path();
        debug!(
            path = %self.path.display(),
            temp = %temp.display(),
            bytes = content.len(),
            "Starting atomic write"
        );

        // Stale temp from a previous failed attempt
        if temp.exists() {
            warn!(path = %temp.display(), "Removing stale temp file");
            let _ = std::fs::remove_file(&temp);
        }

        if let Err(e) = self.write_temp(&temp, content) {
            warn!(temp = %temp.display(), error = %e, "Temp write failed, cleaning up");
            let _ = std::fs::remove_file(&temp);
            return Err(StoreError::WriteFailed {
                path: temp.display().to_string(),
                source: e,
            });
        }

        // The rename is the sole mutation of the live file.
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            warn!(temp = %temp.display(), error = %e, "Rename failed, cleaning up temp file");
            let _ = std::fs::remove_file(&temp);
            return Err(StoreError::RenameFailed {
                temp: temp.display().to_string(),
                path: self.path.display().to_string(),
                source: e,
            });
        }

        debug!(path = %self.path.display(), "Atomic write committed");
        Ok(())
    }

    fn write_temp(&self, temp: &Path, content: &str) -> std::io::Result<()> {
        let mut file = File::create(temp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()
    }

    /// Append content to the file, optionally followed by a newline.
    ///
    /// Weaker guarantee than [`atomic_write`](Self::atomic_write): a
    /// crash mid-append may leave a partial trailing record. Intended
    /// for non-critical incremental logging, not the canonical
    /// snapshot.
    pub fn append(&self, content: &str, trailing_newline: bool) -> StoreResult<()> {
        self.validate_path()?;

        let map_err = |e| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(map_err)?;
        file.write_all(content.as_bytes()).map_err(map_err)?;
        if trailing_newline {
            file.write_all(b"\n").map_err(map_err)?;
        }
        Ok(())
    }

    /// Read the file's full content.
    ///
    /// A missing file is valid readable-empty content and returns
    /// `Ok("")`; any other open failure is a [`StoreError::ReadFailed`].
    pub fn read_all(&self) -> StoreResult<String> {
        self.validate_path()?;

        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(StoreError::ReadFailed {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Read the file split on line boundaries.
    ///
    /// Empty lines are preserved as empty strings; the trailing newline
    /// (if any) does not produce a final empty entry.
    pub fn read_lines(&self) -> StoreResult<Vec<String>> {
        let content = self.read_all()?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Truncate the file to zero length.
    pub fn clear(&self) -> StoreResult<()> {
        self.validate_path()?;

        File::create(&self.path).map_err(|e| StoreError::WriteFailed {
            path: self.path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// SHA-256 digest of arbitrary content, hex-encoded.
    ///
    /// A building block for integrity verification; no read path in the
    /// core gates on a checksum match.
    pub fn compute_checksum(content: &str) -> String {
        hex::encode(Sha256::digest(content.as_bytes()))
    }
}
