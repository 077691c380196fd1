//! Orchestration: the single entry point composing store, inventory,
//! queue and dispatcher.
//!
//! Two operation modes share the same handlers:
//! - **immediate**: `add_item` / `remove_item` / queries call straight
//!   into the inventory;
//! - **deferred**: `enqueue_*` buffers a task, `process_tasks` drains
//!   the queue through the dispatcher.
//!
//! Persistence is explicit in both modes: nothing is written unless
//! `save_all` runs (or the autosave flag is set, which makes direct
//! mutations call it). `process_tasks` never saves on its own.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use stockroom_core::{Item, ItemId, Result, Task, TaskPriority};
use stockroom_durability::FileStore;

use crate::codec::SnapshotFormat;
use crate::dispatcher::CommandDispatcher;
use crate::inventory::Inventory;
use crate::queue::{split_command_line, DrainReport, TaskQueue};
use crate::reporter::{NullReporter, Reporter};

/// Configuration for a [`Controller`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Data file the controller's store will own.
    pub path: PathBuf,
    /// Snapshot format for save/load.
    pub format: SnapshotFormat,
    /// When set, direct mutations persist immediately via `save_all`.
    pub autosave: bool,
}

impl ControllerConfig {
    /// Config with the default format (CSV) and autosave off.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ControllerConfig {
            path: path.into(),
            format: SnapshotFormat::default(),
            autosave: false,
        }
    }

    /// Choose the snapshot format.
    pub fn format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle autosave for direct mutations.
    pub fn autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
}

/// Composes `FileStore`, `Inventory`, `TaskQueue` and
/// `CommandDispatcher`; exposes immediate and deferred operation modes.
pub struct Controller {
    store: FileStore,
    inventory: Inventory,
    queue: TaskQueue,
    dispatcher: CommandDispatcher,
    reporter: Box<dyn Reporter>,
    format: SnapshotFormat,
    autosave: bool,
}

impl Controller {
    /// Build a controller with the built-in command set and a no-op
    /// reporter.
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_reporter(config, Box::new(NullReporter))
    }

    /// Build a controller with an injected reporter.
    pub fn with_reporter(config: ControllerConfig, reporter: Box<dyn Reporter>) -> Self {
        Controller {
            store: FileStore::new(config.path),
            inventory: Inventory::new(),
            queue: TaskQueue::new(),
            dispatcher: CommandDispatcher::with_builtins(),
            reporter,
            format: config.format,
            autosave: config.autosave,
        }
    }

    /// Initialize storage and load any existing snapshot.
    ///
    /// Fails fast on a storage error; no partial recovery is attempted.
    pub fn initialize(&mut self) -> Result<()> {
        self.store.initialize()?;

        let content = self.store.read_all()?;
        if !content.trim().is_empty() {
            let items = self.format.decode(&content)?;
            info!(
                path = %self.store.path().display(),
                items = items.len(),
                "Loaded inventory snapshot"
            );
            self.inventory.replace(items);
        }
        Ok(())
    }

    /// Encode the inventory and write it durably.
    ///
    /// This is the only path by which in-memory mutations become
    /// durable.
    pub fn save_all(&self) -> Result<()> {
        let snapshot = self.format.encode(&self.inventory)?;
        self.store.atomic_write(&snapshot)?;
        info!(
            path = %self.store.path().display(),
            items = self.inventory.len(),
            "Saved inventory snapshot"
        );
        Ok(())
    }

    // ========================================================================
    // Immediate mode
    // ========================================================================

    /// Add an item directly. Persists only under autosave.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        location: impl Into<String>,
    ) -> Result<()> {
        let item = Item::new(id, name, quantity, location)?;
        self.inventory.add(item)?;
        self.autosave_if_enabled()
    }

    /// Remove an item directly. Persists only under autosave.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item> {
        let removed = self.inventory.remove(id)?;
        self.autosave_if_enabled()?;
        Ok(removed)
    }

    /// Look up an item. Returns an owned copy.
    pub fn get_item(&self, id: ItemId) -> Option<Item> {
        self.inventory.get(id).cloned()
    }

    /// One page of the id-sorted inventory.
    pub fn list_items(&self, page: usize, page_size: usize) -> Vec<Item> {
        self.inventory.page(page, page_size)
    }

    fn autosave_if_enabled(&self) -> Result<()> {
        if self.autosave {
            self.save_all()?;
        }
        Ok(())
    }

    // ========================================================================
    // Deferred mode
    // ========================================================================

    /// Tokenize a raw command line and buffer it as a task.
    ///
    /// Whitespace-only input queues nothing (silent no-op).
    pub fn enqueue_raw(&mut self, raw: &str, priority: TaskPriority) {
        let mut tokens = split_command_line(raw);
        if tokens.is_empty() {
            return;
        }
        let command = tokens.remove(0);
        self.queue.enqueue(Task::new(command, tokens, priority));
    }

    /// Queue an ADD with the canonical quoted command line.
    ///
    /// The command-line syntax has no escape sequence, so `name` and
    /// `location` must not contain a double quote; such a value would
    /// mis-tokenize. Use [`Controller::add_item`] for arbitrary
    /// strings.
    pub fn enqueue_add(
        &mut self,
        id: ItemId,
        name: &str,
        quantity: u32,
        location: &str,
        priority: TaskPriority,
    ) {
        self.enqueue_raw(
            &format!("ADD {} \"{}\" {} \"{}\"", id, name, quantity, location),
            priority,
        );
    }

    /// Queue a REMOVE.
    pub fn enqueue_remove(&mut self, id: ItemId, priority: TaskPriority) {
        self.enqueue_raw(&format!("REMOVE {}", id), priority);
    }

    /// Queue a LIST, with optional page and page size.
    pub fn enqueue_list(
        &mut self,
        page: Option<usize>,
        page_size: Option<usize>,
        priority: TaskPriority,
    ) {
        let mut line = "LIST".to_string();
        if let Some(page) = page {
            line.push_str(&format!(" {}", page));
            if let Some(size) = page_size {
                line.push_str(&format!(" {}", size));
            }
        }
        self.enqueue_raw(&line, priority);
    }

    /// Queue a SEARCH.
    pub fn enqueue_search(&mut self, id: ItemId, priority: TaskPriority) {
        self.enqueue_raw(&format!("SEARCH {}", id), priority);
    }

    /// Drain up to `limit` queued tasks (`0` = all) through the
    /// dispatcher, feeding each success to the reporter.
    ///
    /// Persistence after a batch is the caller's responsibility, same
    /// as in direct mode.
    pub fn process_tasks(&mut self, limit: usize) -> DrainReport {
        let Self {
            queue,
            dispatcher,
            inventory,
            reporter,
            ..
        } = self;

        let report = queue.drain(limit, |task| {
            let outcome = dispatcher.dispatch(inventory, task);
            if let Ok(output) = &outcome {
                reporter.report(output);
            }
            outcome
        });

        if report.failed > 0 {
            warn!(failed = report.failed, "Batch finished with failures");
        }
        report
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of tasks still queued.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Read access to the inventory collaborator.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the dispatcher, for registering extra
    /// commands.
    pub fn dispatcher_mut(&mut self) -> &mut CommandDispatcher {
        &mut self.dispatcher
    }

    /// The data file path this controller's store owns.
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }
}
