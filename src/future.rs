//! Bridging abortable futures into the tracking contract
//!
//! Transports written against the futures ecosystem already come with a
//! cancellation capability of their own: an abort handle paired with an
//! abortable future. This module lets the registry track such requests
//! directly, and classifies an aborted future the same way the transport
//! port classifies a raised cancellation flag, so the two worlds agree on
//! what a superseded request looks like.

use crate::cancel::Cancel;
use crate::status::{RequestError, RequestStatus};
use futures::future::{AbortHandle, Abortable, Aborted};
use std::future::Future;

impl Cancel for AbortHandle {
    fn cancel(&mut self) {
        self.abort();
    }
}

/// Wrap a future so that it can be tracked and superseded
///
/// The returned handle goes into the view's registry; the abortable future
/// goes to whatever executor drives the view's I/O.
///
pub fn abortable<F: Future>(future: F) -> (Abortable<F>, AbortHandle) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(future, registration), handle)
}

/// Classify the outcome of an abortable request future
///
/// An aborted future settles as cancelled, never as failed: its result was
/// superseded and must not reach the view, not even as an error message.
///
pub fn into_status<T, E>(outcome: Result<Result<T, E>, Aborted>) -> RequestStatus<T, E> {
    match outcome {
        Err(Aborted) => RequestStatus::Cancelled,
        Ok(Ok(payload)) => RequestStatus::Completed(payload),
        Ok(Err(err)) => RequestStatus::Failed(RequestError::Api(err)),
    }
}

/// Unit tests
#[cfg(test)]
mod tests {
    use crate::future::*;
    use crate::registry::OperationRegistry;
    use crate::status::{RequestError, RequestStatus};
    use futures::executor::block_on;

    /// Check that an unaborted future completes normally
    #[test]
    fn unaborted_future_completes() {
        let (request, _handle) = abortable(async { Ok::<_, String>(42u32) });
        let status = into_status(block_on(request));
        assert_eq!(status, RequestStatus::Completed(42));
    }

    /// Check that a failed future surfaces its error
    #[test]
    fn failed_future_surfaces() {
        let (request, _handle) = abortable(async { Err::<u32, _>("boom".to_owned()) });
        let status = into_status(block_on(request));
        assert_eq!(
            status,
            RequestStatus::Failed(RequestError::Api("boom".to_owned()))
        );
    }

    /// Check that superseding through the registry aborts tracked futures
    /// and that their settlement classifies as cancelled
    #[test]
    fn superseded_future_is_cancelled() {
        let (request_a, handle_a) = abortable(async { Ok::<_, String>(1u32) });
        let (request_b, handle_b) = abortable(async { Ok::<_, String>(2u32) });

        let mut registry = OperationRegistry::new();
        registry.track(handle_a);
        registry.track(handle_b);
        registry.cancel_all();

        // Aborted futures resolve immediately, even though the underlying
        // work never ran
        assert_eq!(into_status(block_on(request_a)), RequestStatus::Cancelled);
        assert_eq!(into_status(block_on(request_b)), RequestStatus::Cancelled);
        assert!(registry.is_empty());
    }
}
