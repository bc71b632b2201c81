//! Request lifecycle tracking for query-driven views
//!
//! Picture a screen that lets a user filter a list of people by role, group
//! and section. Every change of a filter fires a fresh query against a remote
//! API, some screens fire several queries per user action, and network
//! responses come back whenever they please. Without care, a slow response
//! from the previous filter set arrives after the fast response from the
//! current one and quietly overwrites it, and the user is left looking at
//! results for a query they no longer asked.
//!
//! The usual fix is scattered through every fetch call site: ad-hoc lists of
//! "active requests" in ambient state, hand-rolled checks before applying a
//! result, and error handlers that must remember not to report an abort as a
//! failure. This crate extracts that recurring pattern into one explicit,
//! testable contract: each view owns a registry of its in-flight cancelable
//! operations, starting a new logical query cancels every operation of the
//! previous generation, and a settlement that arrives after its generation
//! was superseded is classified as cancelled and discarded without a trace.
//!
//! The registry does not care what an operation is. Anything exposing a
//! cancellation capability can be tracked: a flag shared with a transport
//! thread, an abortable future, or a whole scatter/gather sequence folded
//! under one aggregated capability.

pub mod cancel;
pub mod delivery;
pub mod future;
pub mod gather;
pub mod registry;
pub mod session;
pub mod status;
pub mod transport;
