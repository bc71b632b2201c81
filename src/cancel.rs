//! The cancellation capability shared by all tracked requests
//!
//! Generally speaking, the details of a request's client interface depend on
//! how the view has chosen to receive its settlement. However, one service
//! which is common to all tracked requests is the ability to request their
//! cancellation, and it is the only capability the operation registry ever
//! needs from them.
//!
//! Note that cancellation is cooperative. Some transports cannot abort an
//! in-flight call once it has left the process, so we cannot guarantee that
//! cancelling actually stops any work. What we can guarantee is that the
//! transport side is able to check at settlement time whether a cancellation
//! request was issued, and will then classify the settlement as cancelled
//! rather than completed or failed, so the stale result is discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Capability which every tracked request must expose
///
/// Invoking `cancel` more than once is harmless: the transition to the
/// cancelled state happens on the first call and later calls are no-ops.
///
pub trait Cancel {
    /// Request the cancellation of the in-flight request
    fn cancel(&mut self);
}

/// Shared cancellation flag linking a request handle to its transport side
///
/// Clones observe one another: the view-side clone raises the flag, and the
/// transport-side clone polls it when the response arrives. This is the same
/// mechanism whether the flag serves a single request or is aggregated over
/// a whole scatter/gather sequence.
///
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    /// Atomic boolean raised by the view to request cancellation
    cancelled: Arc<AtomicBool>,
}
//
impl CancelFlag {
    /// Create a new, unraised cancellation flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
//
impl Cancel for CancelFlag {
    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
