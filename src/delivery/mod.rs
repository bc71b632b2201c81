//! Settlement delivery to the view
//!
//! This submodule provides the concrete request flavors a view can dispatch,
//! differing only in how the settlement reaches the view once the transport
//! classifies it.
//!
//! Two delivery mechanisms are proposed:
//!
//! - Callbacks hand the settlement to a caller-supplied closure, which is
//!   where a panel applies a completed result to its displayed state (and
//!   ignores a cancelled one). This is the mechanism the supersede contract
//!   was designed around.
//! - Polling lets the view periodically read the latest request status
//!   without blocking or synchronizing, which suits progress readouts such
//!   as spinners while a query is still pending.
//!
//! Both flavors share the same transport-side classification, so a
//! superseded request is discarded identically whichever way its settlement
//! would have been delivered.

pub mod callback;
pub mod polling;
