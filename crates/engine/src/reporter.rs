//! Output reporting.
//!
//! Console/formatting state is not a process-wide singleton: the
//! controller takes an injected [`Reporter`] so the core stays testable
//! without console side effects. The library ships a no-op reporter for
//! tests and a tracing-backed one; a CLI front end would provide its
//! own table/color rendering.

use tracing::info;

use crate::dispatcher::Output;

/// Sink for the results of dispatched commands.
pub trait Reporter {
    /// Render one command output.
    fn report(&self, output: &Output);
}

/// Discards everything. Useful in tests and batch contexts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _output: &Output) {}
}

/// Emits outputs as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, output: &Output) {
        match output {
            Output::None => {}
            Output::Added(id) => info!(item = %id, "added"),
            Output::Removed(id) => info!(item = %id, "removed"),
            Output::Item(item) => info!(item = %item, "found"),
            Output::Items(items) => {
                for item in items {
                    info!(item = %item, "listed");
                }
            }
        }
    }
}
