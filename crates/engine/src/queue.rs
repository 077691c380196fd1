//! Priority-ordered task buffer.
//!
//! Tasks drain strictly by priority; within a priority class, arrival
//! order is preserved. A bare max-heap does not give the second half of
//! that guarantee, so each entry carries a monotonically increasing
//! arrival sequence number used as the tie-breaker.
//!
//! The queue has no backing store: process termination discards all
//! pending tasks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use stockroom_core::{CommandError, Task};

use crate::dispatcher::Output;

/// Split a raw command line on whitespace, honoring double-quote
/// grouping so a parameter containing spaces stays one token. Quotes
/// toggle grouping and are not part of the token.
pub fn split_command_line(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Aggregate counts from one drain call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Tasks popped and dispatched
    pub dispatched: usize,
    /// Dispatches that returned Ok
    pub succeeded: usize,
    /// Dispatches that returned a reported failure
    pub failed: usize,
}

// Heap entry: max-heap pops the highest priority first, and within a
// priority the LOWEST sequence number (earliest arrival).
#[derive(Debug)]
struct QueuedTask {
    task: Task,
    seq: u64,
}

impl PartialEq for QueuedTask {
    fn eq(&self, other: &Self) -> bool {
        self.task.priority == other.task.priority && self.seq == other.seq
    }
}

impl Eq for QueuedTask {}

impl Ord for QueuedTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.task
            .priority
            .cmp(&other.task.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueuedTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-ordered buffer of deferred tasks.
#[derive(Debug, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<QueuedTask>,
    next_seq: u64,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Buffer a task for a later drain.
    pub fn enqueue(&mut self, task: Task) {
        debug!(
            task = %task.id,
            command = %task.command,
            priority = %task.priority,
            "Queued task"
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueuedTask { task, seq });
    }

    /// Pop the next task in drain order, if any.
    pub fn pop(&mut self) -> Option<Task> {
        self.heap.pop().map(|q| q.task)
    }

    /// Drain up to `limit` tasks (`0` means unbounded), dispatching
    /// each through `dispatch` in priority order.
    ///
    /// One failing task never aborts the batch: failures are tallied
    /// and the loop continues. A partial drain leaves the remaining
    /// tasks intact for a later call.
    pub fn drain<F>(&mut self, limit: usize, mut dispatch: F) -> DrainReport
    where
        F: FnMut(&Task) -> Result<Output, CommandError>,
    {
        let mut report = DrainReport::default();

        loop {
            if limit != 0 && report.dispatched >= limit {
                break;
            }
            let Some(task) = self.pop() else { break };

            report.dispatched += 1;
            match dispatch(&task) {
                Ok(_) => report.succeeded += 1,
                Err(e) => {
                    warn!(task = %task.id, command = %task.command, error = %e, "Task failed");
                    report.failed += 1;
                }
            }
        }

        debug!(
            dispatched = report.dispatched,
            succeeded = report.succeeded,
            failed = report.failed,
            remaining = self.heap.len(),
            "Drain finished"
        );
        report
    }
}
