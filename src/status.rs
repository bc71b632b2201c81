//! Facilities to represent the settlement status of tracked requests
//!
//! This module provides facilities to represent and reason about the status
//! of one asynchronous request. The model is the following: a request starts
//! on the view side in a pending state, is shipped to whatever transport the
//! application uses, and eventually settles in exactly one of three terminal
//! states: completed, failed, or cancelled.

use thiserror::Error;

/// Representation of a tracked request's status
///
/// This enumeration follows a state machine design. Here are the possible
/// state transitions:
///
/// - Pending -> Completed / Failed / Cancelled
///
/// All three settled states are terminal. Cancelled is only ever reached
/// through a request's cancellation capability (typically because a newer
/// query superseded this one, or because the owning view was torn down);
/// a request never cancels itself.
///
#[derive(Clone, Debug, PartialEq)]
pub enum RequestStatus<T, E> {
    /// The request has been dispatched, but has not settled yet
    Pending,

    /// The transport delivered a successful response
    Completed(T),

    /// The transport delivered an error, to be surfaced to the user
    Failed(RequestError<E>),

    /// The request was superseded or torn down before it could settle;
    /// its result, if any ever arrives, must be discarded
    Cancelled,
}

/// Check if a request status is settled (i.e. won't change anymore)
pub fn is_settled<T, E>(s: &RequestStatus<T, E>) -> bool {
    use self::RequestStatus::*;
    match *s {
        Pending => false,
        Completed(_) | Failed(_) | Cancelled => true,
    }
}

/// Failure modes of a tracked request
///
/// Note that cancellation is deliberately absent from this list: a superseded
/// request is not a failed request, and must never be surfaced as one.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequestError<E> {
    /// The transport side was dropped before the request settled
    #[error("transport dropped before the request settled")]
    TransportDropped,

    /// An application-level error occurred while serving the request
    #[error("request failed: {0}")]
    Api(E),
}
