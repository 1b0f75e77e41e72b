//! Tracking of overlapping analyze invocations.

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// What happens when analyze is invoked while a request is still in flight.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InFlightPolicy {
    /// The newest invocation wins; older responses are dropped unrendered.
    #[default]
    Supersede,
    /// New invocations are turned away until the pending one finishes.
    Reject,
}

/// Generation counter plus count of requests in flight.
#[derive(Debug, Default)]
pub(crate) struct InFlightTracker {
    generation: AtomicU64,
    active: AtomicUsize,
}

impl InFlightTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts an invocation unconditionally, making it the newest.
    pub(crate) fn begin(&self) -> Ticket<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        self.issue()
    }

    /// Starts an invocation only if nothing else is in flight.
    pub(crate) fn try_begin_exclusive(&self) -> Option<Ticket<'_>> {
        self.active
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| self.issue())
    }

    pub(crate) fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    fn issue(&self) -> Ticket<'_> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            tracker: self,
            generation,
        }
    }
}

/// Proof of an in-flight invocation; released on drop.
#[derive(Debug)]
pub(crate) struct Ticket<'a> {
    tracker: &'a InFlightTracker,
    generation: u64,
}

impl Ticket<'_> {
    /// False once a newer invocation has begun.
    pub(crate) fn is_current(&self) -> bool {
        self.tracker.generation.load(Ordering::SeqCst) == self.generation
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        self.tracker.active.fetch_sub(1, Ordering::SeqCst);
    }
}
