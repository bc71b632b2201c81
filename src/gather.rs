//! Scatter/gather sequences under one cancellation capability
//!
//! The details pane of the application runs a recurring sequence: fetch a
//! role, fetch the attribute list for that role, then fan out one request per
//! attribute and join the values into a single record. Tracking each child
//! request individually would bloat the registry and complicate the
//! cancel-on-supersede contract, so the whole sequence is modelled as one
//! cancelable operation: the registry tracks a single aggregate, and
//! cancelling it reaches every child, including children dispatched after
//! the cancellation happened.

use crate::cancel::{Cancel, CancelFlag};
use crate::status::RequestStatus;

/// Aggregated cancellation capability for a fan-out of child requests
#[derive(Default)]
pub struct FanOut {
    /// Flag recording that the whole sequence was cancelled, consulted when
    /// minting flags for children dispatched after the fact
    root: CancelFlag,

    /// Flags of the children minted so far
    children: Vec<CancelFlag>,
}
//
impl FanOut {
    /// Create a new, empty fan-out
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the cancellation flag for one child request
    ///
    /// A child minted after the fan-out was cancelled is born cancelled, so
    /// a sequence that keeps dispatching after a supersede still cannot
    /// apply any of its results.
    ///
    pub fn child_flag(&mut self) -> CancelFlag {
        let mut flag = CancelFlag::new();
        if self.root.is_cancelled() {
            flag.cancel();
        }
        self.children.push(flag.clone());
        flag
    }

    /// Check whether the sequence was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }

    /// Number of children minted so far
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check whether any child was minted yet
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
//
impl Cancel for FanOut {
    /// Cancelling the aggregate cancels every child
    fn cancel(&mut self) {
        self.root.cancel();
        for child in &mut self.children {
            child.cancel();
        }
    }
}

/// Join the settlements of a fan-out into the settlement of the sequence
///
/// Cancellation dominates: a superseded scatter yields no partial record, not
/// even when some children completed before the supersede. A failed child
/// fails the sequence next, then any still-pending child keeps it pending,
/// and only a fully completed fan-out completes, with every part in dispatch
/// order.
///
pub fn join<T, E>(parts: Vec<RequestStatus<T, E>>) -> RequestStatus<Vec<T>, E> {
    let mut payloads = Vec::with_capacity(parts.len());
    let mut pending = false;
    for part in parts {
        match part {
            RequestStatus::Cancelled => return RequestStatus::Cancelled,
            RequestStatus::Failed(err) => return RequestStatus::Failed(err),
            RequestStatus::Pending => pending = true,
            RequestStatus::Completed(payload) => payloads.push(payload),
        }
    }
    if pending {
        RequestStatus::Pending
    } else {
        RequestStatus::Completed(payloads)
    }
}

/// Unit tests
#[cfg(test)]
mod tests {
    use crate::cancel::Cancel;
    use crate::gather::*;
    use crate::registry::OperationRegistry;
    use crate::status::{RequestError, RequestStatus};

    /// Check that cancelling the aggregate reaches every child
    #[test]
    fn cancel_reaches_children() {
        let mut fan_out = FanOut::new();
        let flags: Vec<_> = (0..3).map(|_| fan_out.child_flag()).collect();
        assert_eq!(fan_out.len(), 3);

        fan_out.cancel();
        assert!(fan_out.is_cancelled());
        for flag in &flags {
            assert!(flag.is_cancelled());
        }
    }

    /// Check that late children are born cancelled
    #[test]
    fn late_children_born_cancelled() {
        let mut fan_out = FanOut::new();
        fan_out.cancel();
        let late = fan_out.child_flag();
        assert!(late.is_cancelled());
    }

    /// Check that the registry can supersede a whole sequence at once
    #[test]
    fn tracked_as_one_operation() {
        let mut fan_out = FanOut::new();
        let first = fan_out.child_flag();
        let second = fan_out.child_flag();

        let mut registry = OperationRegistry::new();
        registry.track(fan_out);
        assert_eq!(registry.len(), 1);

        registry.cancel_all();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    /// Check the precedence rules of join
    #[test]
    fn join_precedence() {
        type Status = RequestStatus<u32, String>;

        // Cancellation dominates even completed parts
        let parts: Vec<Status> = vec![
            RequestStatus::Completed(1),
            RequestStatus::Cancelled,
            RequestStatus::Failed(RequestError::Api("e".to_owned())),
        ];
        assert_eq!(join(parts), RequestStatus::Cancelled);

        // A failed part fails the sequence
        let parts: Vec<Status> = vec![
            RequestStatus::Completed(1),
            RequestStatus::Failed(RequestError::Api("e".to_owned())),
        ];
        assert_eq!(
            join(parts),
            RequestStatus::Failed(RequestError::Api("e".to_owned()))
        );

        // A pending part keeps the sequence pending
        let parts: Vec<Status> = vec![RequestStatus::Completed(1), RequestStatus::Pending];
        assert_eq!(join(parts), RequestStatus::Pending);

        // A fully completed fan-out completes in dispatch order
        let parts: Vec<Status> = vec![RequestStatus::Completed(1), RequestStatus::Completed(2)];
        assert_eq!(join(parts), RequestStatus::Completed(vec![1, 2]));
    }

    /// Check that joining an empty fan-out completes with no parts
    #[test]
    fn join_empty() {
        let parts: Vec<RequestStatus<u32, String>> = Vec::new();
        assert_eq!(join(parts), RequestStatus::Completed(Vec::new()));
    }
}
