//! Typed notification events emitted during a solver run.
//!
//! The engine publishes progress, log lines, and discovered solutions
//! through an [`EventSink`]; consumers (console, tests, a worker-thread
//! caller) drain events on their own scheduling turn. The engine never
//! blocks on or reads back from the sink.

use std::sync::mpsc;

use crate::engine::{InputError, RunReport};
use crate::layout::Layout;

/// A human-readable log message.
///
/// `continuation` marks a fragment of the current line (the per-permutation
/// progress marker), letting a text console decide whether to start a new
/// line before printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub continuation: bool,
}

impl LogLine {
    pub fn complete(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continuation: false,
        }
    }

    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continuation: true,
        }
    }
}

/// Events emitted over the lifetime of one solver run.
#[derive(Debug, Clone)]
pub enum Event {
    /// Percentage complete, 0-100, non-decreasing within a run.
    Progress(u8),
    /// A log message or fragment.
    Log(LogLine),
    /// A new unique solution was appended to the result set.
    SolutionFound(Layout),
    /// An async run finished; carries the full result.
    Finished(RunReport),
    /// An async run was rejected before searching.
    Failed(InputError),
}

/// Receives engine events. Implementations must not panic.
pub trait EventSink {
    fn emit(&self, event: Event);
}

/// Discards every event. Default sink for callers that only want the
/// returned report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: Event) {}
}

/// Channel-backed sink: events cross the thread boundary as owned values.
/// A disconnected receiver silently drops events rather than failing the
/// run.
impl EventSink for mpsc::Sender<Event> {
    fn emit(&self, event: Event) {
        let _ = self.send(event);
    }
}

/// Adapts a closure into an [`EventSink`].
pub struct FnSink<F: Fn(Event)>(pub F);

impl<F: Fn(Event)> EventSink for FnSink<F> {
    fn emit(&self, event: Event) {
        (self.0)(event)
    }
}
