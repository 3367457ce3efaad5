//! Event types and sinks for observing generation runs.
//!
//! [`crate::run::runner::GenerationRunner::run_with_events`] emits a [`RunEvent`] when
//! the run starts, around each enabled family, and when the run finishes.
use std::path::PathBuf;

use crate::config::Family;
use crate::run::runner::{FamilyReport, RunReport};

/// Describes events emitted during a generation run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Emitted after validation, before the first family runs.
    RunStarted {
        /// Base seed all family seeds are derived from.
        seed: u64,
        /// Enabled families in the order they will run.
        families: Vec<Family>,
    },

    /// Emitted when a family starts generating.
    FamilyStarted {
        family: Family,
        /// Data file the family will be written to.
        path: PathBuf,
    },

    /// Emitted once a family's data file has been written and closed.
    FamilyFinished { report: FamilyReport },

    /// Emitted when every enabled family has been written.
    RunFinished { report: RunReport },
}

/// Discriminant of a [`RunEvent`], used by sinks to opt out of events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunEventKind {
    RunStarted,
    FamilyStarted,
    FamilyFinished,
    RunFinished,
}

impl RunEvent {
    pub fn kind(&self) -> RunEventKind {
        match self {
            RunEvent::RunStarted { .. } => RunEventKind::RunStarted,
            RunEvent::FamilyStarted { .. } => RunEventKind::FamilyStarted,
            RunEvent::FamilyFinished { .. } => RunEventKind::FamilyFinished,
            RunEvent::RunFinished { .. } => RunEventKind::RunFinished,
        }
    }
}

/// A generic event sink that accepts [`RunEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: RunEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: RunEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: RunEvent) {}

    #[inline]
    fn wants(&self, _kind: RunEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(RunEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(RunEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(RunEvent),
{
    #[inline]
    fn send(&mut self, event: RunEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<RunEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<RunEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[RunEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: RunEvent) {
        self.events.push(event);
    }
}
