//! Durability layer for Stockroom
//!
//! This crate handles everything that touches disk:
//!
//! - Single-file ownership: one [`FileStore`] per data file per process
//! - Atomic overwrite: backup, write-to-temp, rename-as-commit
//! - Append mode for non-critical incremental logging
//! - Read-back (full content or line-split)
//! - SHA-256 checksum utility for integrity hooks
//!
//! The store knows nothing about inventory semantics; it moves opaque
//! text durably and reports structured errors instead of raising.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::FileStore;
pub use stockroom_core::{StoreError, StoreResult};
