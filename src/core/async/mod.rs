//! Asynchronous settlement support
//!
//! The settlement computation itself is synchronous and cheap, but
//! interactive callers recompute on every expense change and should not
//! block while doing so. This module provides a worker that runs the
//! computation on a background task and discards stale results.

pub mod worker;

pub use worker::{await_settlement, ComputationState, SettlementWorker};
