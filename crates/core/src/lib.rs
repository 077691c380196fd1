//! Core types for Stockroom
//!
//! This crate defines the foundational types used throughout the system:
//! - ItemId / Item: the inventory record
//! - TaskId / Task / TaskPriority: one deferred command with its metadata
//! - Error hierarchy: StoreError (durability), CommandError (dispatch/codec)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod item;
pub mod task;

pub use error::{CommandError, Error, Result, StoreError, StoreResult};
pub use item::{Item, ItemId};
pub use task::{now_micros, Task, TaskId, TaskPriority};
