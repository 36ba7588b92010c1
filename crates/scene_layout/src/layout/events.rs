//! Event types and sinks for observing layout runs.
//!
//! This module defines [`LayoutEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing a [`crate::layout::plan::LayoutPlan`]
//! via [`crate::layout::runner::LayoutRunner`] or [`crate::layout::runner::run_plan`].
use crate::layout::runner::LayoutResult;
use crate::layout::{Kind, Placement};

/// Where a placement came from within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSource {
    /// Generated by the rule at this index.
    Rule(usize),
    /// Copied from the fixed placement at this index.
    Fixed(usize),
}

/// Describes events emitted by layout runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// Emitted once all rules validated and generation starts.
    RunStarted {
        /// Number of rules in the plan.
        rule_count: usize,
        /// Number of fixed placements in the plan.
        fixed_count: usize,
    },

    /// Emitted when the entire plan finishes.
    RunFinished {
        /// Aggregated result for the run.
        result: LayoutResult,
    },

    /// Emitted when a rule starts expanding.
    RuleStarted {
        /// Index of the rule in the plan.
        index: usize,
        /// Kind produced by the rule.
        kind: Kind,
        /// Number of grid cells the rule covers.
        cells: usize,
    },

    /// Emitted when a rule finished expanding.
    RuleFinished {
        /// Index of the rule in the plan.
        index: usize,
        /// Kind produced by the rule.
        kind: Kind,
        /// Number of placements produced.
        placed: usize,
    },

    /// Emitted for every placement in output order.
    PlacementMade {
        /// Rule or fixed entry that produced it.
        source: PlacementSource,
        /// The placement data.
        placement: Placement,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. `plan`, `rule:0`).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`LayoutEvent`], used by sinks to opt out of event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEventKind {
    RunStarted,
    RunFinished,
    RuleStarted,
    RuleFinished,
    PlacementMade,
    Warning,
}

impl LayoutEvent {
    pub fn kind(&self) -> LayoutEventKind {
        match self {
            LayoutEvent::RunStarted { .. } => LayoutEventKind::RunStarted,
            LayoutEvent::RunFinished { .. } => LayoutEventKind::RunFinished,
            LayoutEvent::RuleStarted { .. } => LayoutEventKind::RuleStarted,
            LayoutEvent::RuleFinished { .. } => LayoutEventKind::RuleFinished,
            LayoutEvent::PlacementMade { .. } => LayoutEventKind::PlacementMade,
            LayoutEvent::Warning { .. } => LayoutEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`LayoutEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: LayoutEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = LayoutEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: LayoutEvent) {}

    #[inline]
    fn wants(&self, _kind: LayoutEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(LayoutEvent),
{
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<LayoutEvent>,
    only: Option<Vec<LayoutEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collect only the listed event kinds.
    pub fn only(mut self, kinds: impl IntoIterator<Item = LayoutEventKind>) -> Self {
        self.only = Some(kinds.into_iter().collect());
        self
    }

    pub fn into_inner(self) -> Vec<LayoutEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[LayoutEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
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
    fn send(&mut self, event: LayoutEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: LayoutEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: LayoutEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: LayoutEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}

/// Minimal adapter trait for types that can expose an [`EventSink`].
pub trait AsEventSink {
    fn as_event_sink(&mut self) -> &mut dyn EventSink;
}

impl<S: EventSink> AsEventSink for S {
    fn as_event_sink(&mut self) -> &mut dyn EventSink {
        self
    }
}
