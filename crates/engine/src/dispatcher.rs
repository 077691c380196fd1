//! Command dispatch.
//!
//! The dispatcher decouples the queue/CLI surface from the set of
//! supported operations and centralizes parameter validation. It is a
//! registry from a case-normalized command name to a handler; the
//! dispatcher itself never mutates inventory state, handlers do.
//!
//! Registration semantics: names are normalized (uppercase) once at
//! registration and once at dispatch; registering the same name twice
//! replaces the prior handler; dispatching an unregistered name is a
//! reported failure, never a panic.

use std::collections::HashMap;

use stockroom_core::{CommandError, Item, ItemId, Task};

use crate::inventory::Inventory;

/// Result payload of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing to show
    None,
    /// An item was added
    Added(ItemId),
    /// An item was removed
    Removed(ItemId),
    /// A single item (SEARCH)
    Item(Item),
    /// A page of items (LIST)
    Items(Vec<Item>),
}

/// A command handler: validates its parameters, applies the effect to
/// the inventory, and reports success or a typed failure.
pub type Handler = Box<dyn Fn(&mut Inventory, &[String]) -> Result<Output, CommandError>>;

/// Registry mapping command names to handlers.
pub struct CommandDispatcher {
    handlers: HashMap<String, Handler>,
}

impl CommandDispatcher {
    /// Empty registry.
    pub fn new() -> Self {
        CommandDispatcher {
            handlers: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the built-in ADD / REMOVE / LIST /
    /// SEARCH handlers.
    pub fn with_builtins() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register("ADD", Box::new(handlers::add));
        dispatcher.register("REMOVE", Box::new(handlers::remove));
        dispatcher.register("LIST", Box::new(handlers::list));
        dispatcher.register("SEARCH", Box::new(handlers::search));
        dispatcher
    }

    /// Bind a handler to a name. Case-insensitive; last registration
    /// wins.
    pub fn register(&mut self, name: &str, handler: Handler) {
        self.handlers.insert(name.to_uppercase(), handler);
    }

    /// Whether a handler is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_uppercase())
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look up the task's command and invoke its handler against the
    /// inventory.
    pub fn dispatch(
        &self,
        inventory: &mut Inventory,
        task: &Task,
    ) -> Result<Output, CommandError> {
        let name = task.command.to_uppercase();
        let handler = self
            .handlers
            .get(&name)
            .ok_or(CommandError::UnknownCommand { command: name })?;
        handler(inventory, &task.params)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// The built-in handlers.
///
/// Each validates argument count and numeric parseability up front and
/// returns a descriptive failure instead of propagating a low-level
/// parse error.
pub mod handlers {
    use super::*;

    /// Default page size for LIST when none is given.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    fn expect_arity(
        command: &str,
        params: &[String],
        expected: usize,
    ) -> Result<(), CommandError> {
        if params.len() != expected {
            return Err(CommandError::BadArity {
                command: command.to_string(),
                expected,
                actual: params.len(),
            });
        }
        Ok(())
    }

    fn parse_number(field: &str, raw: &str) -> Result<u32, CommandError> {
        raw.parse().map_err(|_| CommandError::NotNumeric {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }

    /// `ADD <id> <name> <qty> <location>`
    pub fn add(inventory: &mut Inventory, params: &[String]) -> Result<Output, CommandError> {
        expect_arity("ADD", params, 4)?;
        let id = ItemId(parse_number("id", &params[0])?);
        let quantity = parse_number("quantity", &params[2])?;

        let item = Item::new(id, params[1].clone(), quantity, params[3].clone())?;
        inventory.add(item)?;
        Ok(Output::Added(id))
    }

    /// `REMOVE <id>`
    pub fn remove(inventory: &mut Inventory, params: &[String]) -> Result<Output, CommandError> {
        expect_arity("REMOVE", params, 1)?;
        let id = ItemId(parse_number("id", &params[0])?);

        inventory.remove(id)?;
        Ok(Output::Removed(id))
    }

    /// `LIST [page] [page_size]`
    pub fn list(inventory: &mut Inventory, params: &[String]) -> Result<Output, CommandError> {
        if params.len() > 2 {
            return Err(CommandError::BadArity {
                command: "LIST".to_string(),
                expected: 2,
                actual: params.len(),
            });
        }
        let page = match params.first() {
            Some(raw) => parse_number("page", raw)? as usize,
            None => 0,
        };
        let page_size = match params.get(1) {
            Some(raw) => parse_number("page_size", raw)? as usize,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Output::Items(inventory.page(page, page_size)))
    }

    /// `SEARCH <id>`
    pub fn search(inventory: &mut Inventory, params: &[String]) -> Result<Output, CommandError> {
        expect_arity("SEARCH", params, 1)?;
        let id = ItemId(parse_number("id", &params[0])?);

        inventory
            .get(id)
            .cloned()
            .map(Output::Item)
            .ok_or(CommandError::ItemNotFound { id })
    }
}
