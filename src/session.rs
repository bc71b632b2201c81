//! Per-view fetch lifecycle
//!
//! A view session ties together everything one screen of the application
//! needs to keep its displayed state consistent with its latest query: an
//! operation registry for the view's in-flight requests, and a generation
//! counter identifying the query those requests belong to.
//!
//! The contract the view glue follows is:
//!
//! 1. Before starting any new logical fetch sequence, call `supersede()`.
//!    Every request of the previous generation is cancelled, so a slow
//!    response from an earlier filter set can no longer overwrite fresher
//!    results.
//! 2. Dispatch the new requests and `track()` each one before its result can
//!    be observed.
//! 3. When a settlement arrives, report it with `complete()`; a cancelled
//!    settlement applies nothing to view state.
//! 4. Teardown needs no extra step: dropping the session cancels whatever is
//!    still in flight.

use crate::cancel::Cancel;
use crate::registry::{OperationId, OperationRegistry};

/// Fetch lifecycle state of one view
#[derive(Default)]
pub struct ViewSession {
    /// Registry of the view's in-flight requests
    registry: OperationRegistry,

    /// Generation the live requests belong to
    generation: u64,
}
//
impl ViewSession {
    /// Create a session for a freshly displayed view
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous generation of requests and open the next one
    ///
    /// Returns the new generation number, which the view glue can keep next
    /// to derived state to double-check that a settlement it is about to
    /// apply still belongs to the displayed query.
    ///
    pub fn supersede(&mut self) -> u64 {
        self.registry.cancel_all();
        self.generation += 1;
        tracing::debug!(generation = self.generation, "query generation opened");
        self.generation
    }

    /// Track a request of the current generation
    pub fn track<C: Cancel + 'static>(&mut self, handle: C) -> OperationId {
        self.registry.track(handle)
    }

    /// Record the natural settlement of a tracked request
    pub fn complete(&mut self, id: OperationId) -> bool {
        self.registry.complete(id)
    }

    /// Generation the currently displayed query belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check whether a generation number is still the displayed one
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Number of requests still in flight for this view
    pub fn in_flight(&self) -> usize {
        self.registry.len()
    }
}
