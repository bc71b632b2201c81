//! Polling-based settlement delivery
//!
//! This module provides a way to observe a tracked request through polling.
//! The view periodically reads the latest request status without blocking,
//! as is convenient when refreshing UI controls such as a spinner next to a
//! result list. The status travels through a triple buffer, so reads are
//! wait-free and always see the most recent settlement.

use crate::cancel::{Cancel, CancelFlag};
use crate::status::RequestStatus;
use crate::transport::{GenericTransportPort, TransportConfig};
use std::fmt::Display;
use triple_buffer::{triple_buffer, Input, Output};

/// Tracked request object
pub struct Request<T: Clone + Send, E: Clone + Display + Send> {
    /// Transport interface used to settle the request
    port: TransportPort<T, E>,

    /// View interface used to poll the status and cancel the request
    handle: RequestHandle<T, E>,
}
//
impl<T: Clone + Send, E: Clone + Display + Send> Request<T, E> {
    /// Create a new request whose status can be polled by the view
    pub fn new() -> Self {
        // Setup the status channel...
        let (buf_input, buf_output) = triple_buffer(&RequestStatus::Pending);

        // ...and the shared cancellation flag...
        let flag = CancelFlag::new();

        // ...then build the transport and view halves
        Request {
            port: GenericTransportPort::new(PollingConfig { buf_input }, flag.clone()),
            handle: RequestHandle {
                flag,
                buf_output,
            },
        }
    }

    /// Split the request into transport and view halves, which can be
    /// respectively handed to the transport glue and the view's registry
    pub fn split(self) -> (TransportPort<T, E>, RequestHandle<T, E>) {
        (self.port, self.handle)
    }
}
//
impl<T: Clone + Send, E: Clone + Display + Send> Default for Request<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport interface, used to settle the request
pub type TransportPort<T, E> = GenericTransportPort<PollingConfig<T, E>>;

/// Transport configuration for polling-based settlement delivery
pub struct PollingConfig<T: Clone + Send, E: Clone + Display + Send> {
    /// The settlement will be sent through this triple buffer
    buf_input: Input<RequestStatus<T, E>>,
}
//
impl<T: Clone + Send, E: Clone + Display + Send> TransportConfig for PollingConfig<T, E> {
    type Output = T;
    type Error = E;

    fn deliver(&mut self, status: RequestStatus<T, E>) {
        self.buf_input.write(status);
    }
}

/// View interface, used to poll the status and cancel the request
pub struct RequestHandle<T: Clone + Send, E: Clone + Display + Send> {
    /// Cancellation flag shared with the transport side
    flag: CancelFlag,

    /// Latest request status will be read through this triple buffer
    buf_output: Output<RequestStatus<T, E>>,
}
//
impl<T: Clone + Send, E: Clone + Display + Send> RequestHandle<T, E> {
    /// Access the latest request status
    pub fn status(&mut self) -> &RequestStatus<T, E> {
        self.buf_output.read()
    }

    /// Clone of the underlying cancellation flag
    pub fn cancel_flag(&self) -> CancelFlag {
        self.flag.clone()
    }
}
//
impl<T: Clone + Send, E: Clone + Display + Send> Cancel for RequestHandle<T, E> {
    fn cancel(&mut self) {
        self.flag.cancel();
    }
}

/// Unit tests
#[cfg(test)]
mod tests {
    use crate::cancel::Cancel;
    use crate::delivery::polling::*;
    use crate::status::{is_settled, RequestStatus};

    /// Check the initial state of a polled request
    #[test]
    fn initial_state() {
        let request: Request<u32, String> = Request::new();
        let (_port, mut handle) = request.split();
        assert_eq!(*handle.status(), RequestStatus::Pending);
        assert!(!is_settled(handle.status()));
    }

    /// Check that settlements propagate to the polling side
    #[test]
    fn settlement_propagation() {
        let request: Request<u32, String> = Request::new();
        let (mut port, mut handle) = request.split();
        port.settle(Ok(42));
        assert_eq!(*handle.status(), RequestStatus::Completed(42));
    }

    /// Check that a cancelled request polls as cancelled, not failed
    #[test]
    fn cancelled_propagation() {
        let request: Request<u32, String> = Request::new();
        let (mut port, mut handle) = request.split();
        handle.cancel();
        port.settle(Err("late error".to_owned()));
        assert_eq!(*handle.status(), RequestStatus::Cancelled);
    }

    /// Check that settlements can cross a thread boundary
    #[test]
    fn cross_thread_settlement() {
        let request: Request<u32, String> = Request::new();
        let (mut port, mut handle) = request.split();
        let worker = std::thread::spawn(move || port.settle(Ok(7)));
        worker.join().unwrap();
        assert_eq!(*handle.status(), RequestStatus::Completed(7));
    }
}
