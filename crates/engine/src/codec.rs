//! Snapshot encoding of the inventory.
//!
//! The persisted format is a configuration choice, not a property of
//! the store: CSV lines (`id,name,quantity,location`) or a JSON array
//! of item objects. Both round-trip: `decode(encode(x)) == x` as a set.
//!
//! The CSV arm has no escaping. Fields containing a comma or a newline
//! are rejected at encode time with a codec error rather than silently
//! producing an unparseable file; JSON is the format to pick for
//! arbitrary names.

use stockroom_core::{CommandError, Item, ItemId};

use crate::inventory::Inventory;

/// CSV header line, written on encode and tolerated on decode.
pub const CSV_HEADER: &str = "id,name,quantity,location";

/// Persisted snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    /// One `id,name,quantity,location` line per record, header first.
    #[default]
    Csv,
    /// JSON array of item objects.
    Json,
}

impl SnapshotFormat {
    /// Encode the inventory to a snapshot string.
    pub fn encode(&self, inventory: &Inventory) -> Result<String, CommandError> {
        let items = inventory.items_sorted();
        match self {
            SnapshotFormat::Csv => encode_csv(&items),
            SnapshotFormat::Json => serde_json::to_string_pretty(&items).map_err(|e| {
                CommandError::Encode {
                    reason: e.to_string(),
                }
            }),
        }
    }

    /// Decode a snapshot string into items.
    ///
    /// Blank input decodes to an empty collection in either format.
    pub fn decode(&self, content: &str) -> Result<Vec<Item>, CommandError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        match self {
            SnapshotFormat::Csv => decode_csv(content),
            SnapshotFormat::Json => {
                serde_json::from_str(content).map_err(|e| CommandError::Decode {
                    reason: e.to_string(),
                })
            }
        }
    }
}

fn encode_csv(items: &[Item]) -> Result<String, CommandError> {
    let mut out = String::with_capacity(64 * (items.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for item in items {
        for (field, value) in [("name", &item.name), ("location", &item.location)] {
            if value.contains(',') || value.contains('\n') {
                return Err(CommandError::Encode {
                    reason: format!(
                        "{} of item {} contains a CSV delimiter; use the JSON format",
                        field, item.id
                    ),
                });
            }
        }
        out.push_str(&format!(
            "{},{},{},{}\n",
            item.id, item.name, item.quantity, item.location
        ));
    }
    Ok(out)
}

fn decode_csv(content: &str) -> Result<Vec<Item>, CommandError> {
    let mut items = Vec::new();

    for (index, line) in content.lines().enumerate() {
        // `lines()` strips the newline; a CRLF file still carries the CR.
        // Field content is otherwise taken verbatim, so whitespace-edged
        // names and locations survive the round trip.
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        // Header may or may not be present (older snapshots)
        if index == 0 && line.trim().eq_ignore_ascii_case(CSV_HEADER) {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(CommandError::Decode {
                reason: format!(
                    "line {}: expected 4 fields, got {}",
                    index + 1,
                    fields.len()
                ),
            });
        }

        let id: u32 = fields[0].parse().map_err(|_| CommandError::Decode {
            reason: format!("line {}: invalid id '{}'", index + 1, fields[0]),
        })?;
        let quantity: u32 = fields[2].parse().map_err(|_| CommandError::Decode {
            reason: format!("line {}: invalid quantity '{}'", index + 1, fields[2]),
        })?;

        let item =
            Item::new(ItemId(id), fields[1], quantity, fields[3]).map_err(|e| {
                CommandError::Decode {
                    reason: format!("line {}: {}", index + 1, e),
                }
            })?;
        items.push(item);
    }

    Ok(items)
}
