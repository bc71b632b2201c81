//! General implementation of a request's transport-side settlement port
//!
//! This module contains a generic implementation of the transport side of a
//! tracked request, suitable for classifying and delivering its settlement to
//! the view no matter how the view has chosen to receive it.
//!
//! Classification is where the supersede contract is enforced: if the
//! request's cancellation flag was raised by the time the outcome arrives,
//! the settlement is cancelled, full stop. The response body is discarded, a
//! transport error is not reported, and nothing is logged. This covers the
//! race where a response and a cancellation request cross each other on the
//! wire: a slow response from a superseded query can never be mistaken for a
//! live result.

use crate::cancel::CancelFlag;
use crate::status::{RequestError, RequestStatus};
use std::fmt::Display;

/// Transport-side port, used to settle one tracked request
pub struct GenericTransportPort<Config: TransportConfig> {
    /// User-configurable delivery behaviour
    config: Config,

    /// Cancellation flag shared with the view-side request handle
    flag: CancelFlag,

    /// Flag indicating that the request has settled and must not settle again
    settled: bool,
}
//
impl<Config: TransportConfig> GenericTransportPort<Config> {
    /// Create a new settlement port around a shared cancellation flag
    pub fn new(config: Config, flag: CancelFlag) -> Self {
        GenericTransportPort {
            config,
            flag,
            settled: false,
        }
    }

    /// Check whether the view has requested cancellation
    ///
    /// Transports which can abort early are encouraged to poll this and cut
    /// the request short, but doing so is an optimization: classification at
    /// settlement time discards the stale result either way.
    ///
    pub fn cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }

    /// Classify the outcome of the request and deliver its settlement
    pub fn settle(&mut self, outcome: Result<Config::Output, Config::Error>) {
        // This should only happen once per request
        debug_assert!(!self.settled);
        self.settled = true;

        let status = if self.flag.is_cancelled() {
            // Superseded: the result is dropped silently, without logging
            RequestStatus::Cancelled
        } else {
            match outcome {
                Ok(payload) => RequestStatus::Completed(payload),
                Err(err) => {
                    tracing::warn!(error = %err, "request failed");
                    RequestStatus::Failed(RequestError::Api(err))
                }
            }
        };
        self.config.deliver(status);
    }
}
//
impl<Config: TransportConfig> Drop for GenericTransportPort<Config> {
    /// If the port is dropped before the request has settled, notify the
    /// view so that it does not wait forever on a response that will never
    /// arrive. A drop following cancellation is the expected teardown path
    /// and settles as cancelled; anything else is a transport defect.
    fn drop(&mut self) {
        if !self.settled {
            self.settled = true;
            let status = if self.flag.is_cancelled() {
                RequestStatus::Cancelled
            } else {
                tracing::warn!("transport dropped an unsettled request");
                RequestStatus::Failed(RequestError::TransportDropped)
            };
            self.config.deliver(status);
        }
    }
}

/// Configurable parameters of GenericTransportPort
pub trait TransportConfig {
    /// Payload carried by a completed settlement
    type Output;

    /// Application-level error carried by a failed settlement
    type Error: Display;

    /// Method used to deliver the settlement to the view
    fn deliver(&mut self, status: RequestStatus<Self::Output, Self::Error>);
}
