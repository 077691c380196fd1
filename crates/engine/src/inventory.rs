//! The in-memory item collection.
//!
//! Map-backed for O(1) lookup by id. Query operations return owned
//! snapshot copies: callers must not assume a returned collection
//! reflects subsequent mutations.

use std::collections::HashMap;

use stockroom_core::{CommandError, Item, ItemId};

/// Keyed collection of warehouse items.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: HashMap<ItemId, Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item. Duplicate ids are rejected.
    pub fn add(&mut self, item: Item) -> Result<(), CommandError> {
        if self.items.contains_key(&item.id) {
            return Err(CommandError::DuplicateItem { id: item.id });
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Remove an item by id. Missing ids are rejected.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, CommandError> {
        self.items
            .remove(&id)
            .ok_or(CommandError::ItemNotFound { id })
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Whether an item with this id exists.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|i| u64::from(i.quantity)).sum()
    }

    /// Insert a batch, stopping at the first duplicate.
    pub fn add_many(&mut self, batch: Vec<Item>) -> Result<(), CommandError> {
        for item in batch {
            self.add(item)?;
        }
        Ok(())
    }

    /// Remove a batch of ids; ids that do not exist are skipped.
    /// Returns how many were actually removed.
    pub fn remove_many(&mut self, ids: &[ItemId]) -> usize {
        ids.iter().filter(|id| self.items.remove(id).is_some()).count()
    }

    /// Replace the entire collection (used when loading a snapshot).
    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items.into_iter().map(|i| (i.id, i)).collect();
    }

    /// All items sorted by id. Owned copies.
    pub fn items_sorted(&self) -> Vec<Item> {
        let mut all: Vec<Item> = self.items.values().cloned().collect();
        all.sort_by_key(|i| i.id);
        all
    }

    /// All items sorted by name (case-insensitive), ties broken by id.
    pub fn items_sorted_by_name(&self) -> Vec<Item> {
        let mut all: Vec<Item> = self.items.values().cloned().collect();
        all.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        all
    }

    /// All items sorted by quantity ascending, ties broken by id.
    pub fn items_sorted_by_quantity(&self) -> Vec<Item> {
        let mut all: Vec<Item> = self.items.values().cloned().collect();
        all.sort_by_key(|i| (i.quantity, i.id));
        all
    }

    /// All items sorted by location, ties broken by id.
    pub fn items_sorted_by_location(&self) -> Vec<Item> {
        let mut all: Vec<Item> = self.items.values().cloned().collect();
        all.sort_by(|a, b| a.location.cmp(&b.location).then(a.id.cmp(&b.id)));
        all
    }

    /// One page of the id-sorted view.
    pub fn page(&self, page: usize, page_size: usize) -> Vec<Item> {
        if page_size == 0 {
            return Vec::new();
        }
        self.items_sorted()
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    /// Items stored at the given location.
    pub fn filter_by_location(&self, location: &str) -> Vec<Item> {
        let mut found: Vec<Item> = self
            .items
            .values()
            .filter(|i| i.location == location)
            .cloned()
            .collect();
        found.sort_by_key(|i| i.id);
        found
    }

    /// Items whose quantity falls in `[min, max]` inclusive.
    pub fn filter_by_quantity(&self, min: u32, max: u32) -> Vec<Item> {
        let mut found: Vec<Item> = self
            .items
            .values()
            .filter(|i| i.quantity >= min && i.quantity <= max)
            .cloned()
            .collect();
        found.sort_by_key(|i| i.id);
        found
    }

    /// Items whose name contains the query, case-insensitively.
    pub fn search_by_name(&self, query: &str) -> Vec<Item> {
        let needle = query.to_lowercase();
        let mut found: Vec<Item> = self
            .items
            .values()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by_key(|i| i.id);
        found
    }
}
