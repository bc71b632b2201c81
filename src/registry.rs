//! Registry of the in-flight requests belonging to one view
//!
//! Each logical view of the application (a panel, a details pane...) issues
//! queries independently, and only ever cares about the results of the most
//! recent one. The registry owns the cancellation capabilities of every
//! request started after the last full cancellation and not yet settled, so
//! that starting a new logical query can supersede all of its predecessors in
//! one call, no matter how many requests the previous query fanned out into.
//!
//! The registry must not be shared across views: cancelling everything it
//! contains would then incorrectly cancel unrelated work. Each view scope
//! instantiates its own registry.

use crate::cancel::Cancel;

/// Identifier under which an operation is tracked by one registry
///
/// Returned by `track` and handed back to `complete` when the operation
/// settles on its own. Identifiers are never reused within one registry.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OperationId(u64);

/// Ordered collection of the currently live cancelable operations of a view
#[derive(Default)]
pub struct OperationRegistry {
    /// Cancellation capabilities of the live operations, in tracking order
    live: Vec<(OperationId, Box<dyn Cancel>)>,

    /// Next identifier to be handed out by track()
    next_id: u64,
}
//
impl OperationRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the cancellation capability of a freshly dispatched request
    ///
    /// Must be called before the request's result can be observed, so that a
    /// supersede arriving in between cannot miss it. Never fails.
    ///
    pub fn track<C: Cancel + 'static>(&mut self, handle: C) -> OperationId {
        let id = OperationId(self.next_id);
        self.next_id += 1;
        self.live.push((id, Box::new(handle)));
        tracing::trace!(id = id.0, live = self.live.len(), "operation tracked");
        id
    }

    /// Record the natural settlement of a tracked operation
    ///
    /// Removes the operation from the registry without invoking its
    /// cancellation capability. Returns whether the operation was still
    /// live; an operation swept away by an earlier `cancel_all` is gone
    /// already, and reporting its settlement is then a harmless no-op.
    ///
    pub fn complete(&mut self, id: OperationId) -> bool {
        let before = self.live.len();
        self.live.retain(|(live_id, _)| *live_id != id);
        self.live.len() != before
    }

    /// Cancel every live operation, then empty the registry
    ///
    /// Each capability is invoked exactly once, in tracking order (the order
    /// carries no meaning, operations are independent). Idempotent: calling
    /// this on an empty registry does nothing, and it is always safe to call
    /// again, including from a teardown path.
    ///
    pub fn cancel_all(&mut self) {
        if self.live.is_empty() {
            return;
        }
        let superseded = self.live.len();
        for (_, mut handle) in self.live.drain(..) {
            handle.cancel();
        }
        tracing::trace!(superseded, "cancelled all live operations");
    }

    /// Number of currently live operations
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Check whether any operation is currently live
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
//
impl Drop for OperationRegistry {
    /// A registry is torn down together with its view; any request still in
    /// flight at that point must not be allowed to touch view state afterwards
    fn drop(&mut self) {
        self.cancel_all();
    }
}
