//! Engine layer for Stockroom
//!
//! Composes the in-memory model with the dispatch surface:
//!
//! - Inventory: keyed item collection (CRUD, filters, paging)
//! - Snapshot codec: CSV or JSON encode/decode of the inventory
//! - TaskQueue: priority-ordered buffer of deferred commands
//! - CommandDispatcher: name → handler registry with the built-in
//!   ADD / REMOVE / LIST / SEARCH handlers
//! - Controller: single entry point wiring store, inventory, queue and
//!   dispatcher together, in both immediate and deferred modes

#![warn(clippy::all)]

pub mod codec;
pub mod controller;
pub mod dispatcher;
pub mod inventory;
pub mod queue;
pub mod reporter;

pub use codec::SnapshotFormat;
pub use controller::{Controller, ControllerConfig};
pub use dispatcher::{CommandDispatcher, Output};
pub use inventory::Inventory;
pub use queue::{split_command_line, DrainReport, TaskQueue};
pub use reporter::{LogReporter, NullReporter, Reporter};

pub use stockroom_core::{
    CommandError, Error, Item, ItemId, Result, StoreError, Task, TaskId, TaskPriority,
};
pub use stockroom_durability::FileStore;
