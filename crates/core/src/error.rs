//! Error types for Stockroom
//!
//! Two layers of errors, matching the two layers of the system:
//! - [`StoreError`]: durability failures (path validation, backup, write,
//!   rename, read). Every mutating store operation returns one of these
//!   instead of raising; the caller decides whether it is fatal.
//! - [`CommandError`]: per-command validation and codec failures. One
//!   failing task never aborts a batch; the drain loop tallies these.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use std::io;
use thiserror::Error;

use crate::item::ItemId;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for durability operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Top-level error wrapping both layers.
///
/// Controller operations can fail either in storage or in
/// dispatch/decoding, so they return this combined type.
#[derive(Debug, Error)]
pub enum Error {
    /// Durability layer failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Command validation or codec failure
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Durability errors.
///
/// For `atomic_write` specifically, any failure before the final rename
/// leaves the live file untouched: the rename is the single point of
/// commitment.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured path is unusable (empty)
    #[error("invalid path: {reason}")]
    InvalidPath {
        /// Why the path was rejected
        reason: String,
    },

    /// Copying the live file to its `.bak` sibling failed.
    /// The write is aborted: overwriting without a backup would
    /// discard the only safety net.
    #[error("backup failed for {path}: {source}")]
    BackupFailed {
        /// The live file path
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing the temporary file failed
    #[error("write failed for {path}: {source}")]
    WriteFailed {
        /// The path being written
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Renaming the temporary file onto the live path failed
    #[error("rename failed from {temp} to {path}: {source}")]
    RenameFailed {
        /// The temporary file path
        temp: String,
        /// The live file path
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Opening or reading the file failed. A missing file is NOT this
    /// error: reads treat absence as valid empty content.
    #[error("read failed for {path}: {source}")]
    ReadFailed {
        /// The path being read
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Creating the file during initialization failed
    #[error("create failed for {path}: {source}")]
    CreateFailed {
        /// The path being created
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Command validation and codec errors.
///
/// These are expected failures: handlers return them instead of
/// panicking, and a drain loop counts them without stopping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No handler registered under this name
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The (normalized) command name that was looked up
        command: String,
    },

    /// Wrong number of parameters
    #[error("{command} expects {expected} argument(s), got {actual}")]
    BadArity {
        /// Command being validated
        command: String,
        /// Expected parameter count
        expected: usize,
        /// Actual parameter count
        actual: usize,
    },

    /// A parameter that must be a non-negative integer was not
    #[error("{field} must be a non-negative integer, got '{value}'")]
    NotNumeric {
        /// Which parameter failed
        field: String,
        /// The offending raw value
        value: String,
    },

    /// An item with this id already exists
    #[error("duplicate item id: {id}")]
    DuplicateItem {
        /// The conflicting id
        id: ItemId,
    },

    /// No item with this id exists
    #[error("item not found: {id}")]
    ItemNotFound {
        /// The missing id
        id: ItemId,
    },

    /// The item record itself is invalid (e.g. empty name)
    #[error("invalid item: {reason}")]
    InvalidItem {
        /// Why the record was rejected
        reason: String,
    },

    /// Snapshot content could not be decoded
    #[error("decode failed: {reason}")]
    Decode {
        /// Parser-level detail
        reason: String,
    },

    /// Inventory could not be encoded to the snapshot format
    #[error("encode failed: {reason}")]
    Encode {
        /// Encoder-level detail
        reason: String,
    },
}
