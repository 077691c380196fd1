//! The inventory record.
//!
//! An [`Item`] is the unit the warehouse tracks: a numeric id, a name,
//! a quantity, and a shelf location. The record carries its own minimal
//! value-object rules (non-empty name) so that codecs and handlers can
//! rely on them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommandError;

/// Unique identifier for an inventory item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        ItemId(raw)
    }
}

/// One warehouse item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, key of the inventory map
    pub id: ItemId,
    /// Human-readable name, never empty
    pub name: String,
    /// On-hand quantity
    pub quantity: u32,
    /// Shelf location code (e.g. "A1")
    pub location: String,
}

impl Item {
    /// Create a validated item.
    ///
    /// Rejects an empty (or whitespace-only) name. Quantity is
    /// non-negative by construction of the type.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        location: impl Into<String>,
    ) -> Result<Self, CommandError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommandError::InvalidItem {
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(Item {
            id,
            name,
            quantity,
            location: location.into(),
        })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} x{} @ {}",
            self.id, self.name, self.quantity, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_valid() {
        let item = Item::new(ItemId(7), "Widget", 10, "A1").unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.location, "A1");
    }

    #[test]
    fn test_item_new_rejects_empty_name() {
        let result = Item::new(ItemId(1), "", 5, "B2");
        assert!(matches!(result, Err(CommandError::InvalidItem { .. })));
    }

    #[test]
    fn test_item_new_rejects_whitespace_name() {
        let result = Item::new(ItemId(1), "   ", 5, "B2");
        assert!(matches!(result, Err(CommandError::InvalidItem { .. })));
    }

    #[test]
    fn test_item_display() {
        let item = Item::new(ItemId(3), "Bolt", 250, "C4").unwrap();
        let s = item.to_string();
        assert!(s.contains("Bolt"));
        assert!(s.contains("250"));
        assert!(s.contains("C4"));
    }

    #[test]
    fn test_item_json_roundtrip() {
        let item = Item::new(ItemId(42), "Crate of screws", 12, "D7").unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn test_item_id_serde_transparent() {
        let json = serde_json::to_string(&ItemId(9)).unwrap();
        assert_eq!(json, "9");
    }
}
