//! Deferred tasks.
//!
//! A [`Task`] is one deferred command: the operation name, its string
//! parameters, a priority, and metadata. Tasks are immutable once
//! created, consumed exactly once by a queue drain, and never persisted
//! — queue contents are lost on process restart by design.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Priority class of a task. Higher priorities drain first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskPriority {
    /// Background work
    Low = 0,
    /// Default
    Normal = 1,
    /// Drains before everything else
    High = 2,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Normal
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "LOW"),
            TaskPriority::Normal => write!(f, "NORMAL"),
            TaskPriority::High => write!(f, "HIGH"),
        }
    }
}

/// Opaque task identifier, used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current wall-clock time in microseconds since the Unix epoch.
pub fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// One deferred command with its parameters and metadata.
#[derive(Debug, Clone)]
pub struct Task {
    /// Opaque id generated at creation
    pub id: TaskId,
    /// Operation name, normalized to uppercase at construction
    pub command: String,
    /// Ordered string arguments; never mutated after creation
    pub params: Vec<String>,
    /// Drain priority
    pub priority: TaskPriority,
    /// Reserved for a future re-delivery policy; never incremented
    pub retry_count: u32,
    /// Creation time in microseconds, for diagnostics and tie ordering
    pub created_micros: u64,
}

impl Task {
    /// Create a task from an already-tokenized command.
    ///
    /// The command name is case-insensitive; it is normalized here,
    /// once, so the dispatcher only ever sees the canonical form.
    pub fn new(command: impl Into<String>, params: Vec<String>, priority: TaskPriority) -> Self {
        Task {
            id: TaskId::new(),
            command: command.into().to_uppercase(),
            params,
            priority,
            retry_count: 0,
            created_micros: now_micros(),
        }
    }
}
