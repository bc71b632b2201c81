//! Callback-based settlement delivery
//!
//! This module provides a way to receive a request's settlement through a
//! caller-supplied closure. It is the most direct rendition of what the
//! application does with a query result: apply a completed payload to the
//! view's displayed state, surface a failure, and do nothing at all for a
//! cancelled settlement.

use crate::cancel::{Cancel, CancelFlag};
use crate::status::RequestStatus;
use crate::transport::{GenericTransportPort, TransportConfig};
use std::fmt::Display;
use std::marker::PhantomData;

/// Tracked request object
pub struct Request<T, E: Display, F: FnMut(RequestStatus<T, E>)> {
    /// Transport interface used to settle the request
    port: TransportPort<T, E, F>,

    /// View interface used to cancel the request
    handle: RequestHandle,
}
//
impl<T, E: Display, F: FnMut(RequestStatus<T, E>)> Request<T, E, F> {
    /// Create a new request which delivers its settlement to a closure
    pub fn new(on_settle: F) -> Self {
        Self::with_flag(on_settle, CancelFlag::new())
    }

    /// Create a new request around an externally owned cancellation flag
    ///
    /// This is how a scatter/gather sequence shares one aggregated
    /// cancellation capability across all of its child requests.
    ///
    pub fn with_flag(on_settle: F, flag: CancelFlag) -> Self {
        Request {
            port: GenericTransportPort::new(
                CallbackConfig {
                    on_settle,
                    _settlement: PhantomData,
                },
                flag.clone(),
            ),
            handle: RequestHandle { flag },
        }
    }

    /// Split the request into transport and view halves, which can be
    /// respectively handed to the transport glue and the view's registry
    pub fn split(self) -> (TransportPort<T, E, F>, RequestHandle) {
        (self.port, self.handle)
    }
}

/// Transport interface, used to settle the request
pub type TransportPort<T, E, F> = GenericTransportPort<CallbackConfig<T, E, F>>;

/// Transport configuration for callback-based settlement delivery
pub struct CallbackConfig<T, E, F> {
    /// The settlement will be handed to this closure
    on_settle: F,

    /// Settlement type the closure was set up for
    _settlement: PhantomData<fn() -> (T, E)>,
}
//
impl<T, E: Display, F: FnMut(RequestStatus<T, E>)> TransportConfig for CallbackConfig<T, E, F> {
    type Output = T;
    type Error = E;

    fn deliver(&mut self, status: RequestStatus<T, E>) {
        (self.on_settle)(status);
    }
}

/// View interface, used to cancel the request
pub struct RequestHandle {
    /// In callback-based delivery, all the view side can do is cancel
    flag: CancelFlag,
}
//
impl RequestHandle {
    /// Clone of the underlying cancellation flag
    pub fn cancel_flag(&self) -> CancelFlag {
        self.flag.clone()
    }
}
//
impl Cancel for RequestHandle {
    fn cancel(&mut self) {
        self.flag.cancel();
    }
}
