//! Stockroom - warehouse inventory core with durable snapshots
//!
//! Stockroom keeps a small warehouse inventory in memory and persists
//! it with atomic, backup-first file writes. Commands run either
//! immediately or deferred through a priority task queue.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockroom::{Controller, ControllerConfig, ItemId, TaskPriority};
//!
//! let mut ctl = Controller::new(ControllerConfig::new("inventory.csv"));
//! ctl.initialize()?;
//!
//! // Immediate mode
//! ctl.add_item(ItemId(7), "Widget", 10, "A1")?;
//!
//! // Deferred mode
//! ctl.enqueue_raw(r#"ADD 8 "Steel Bolt" 250 "Aisle 3""#, TaskPriority::High);
//! ctl.process_tasks(0);
//!
//! ctl.save_all()?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Controller`], which composes the
//! durable [`FileStore`], the in-memory [`Inventory`], the
//! [`TaskQueue`] and the [`CommandDispatcher`]. The member crates
//! (core, durability, engine) are internal; this facade is the public
//! surface.

// Re-export the public API from stockroom-engine
pub use stockroom_engine::*;
