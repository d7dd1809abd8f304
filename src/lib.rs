//! Settlement Engine Library
//! # Overview
//!
//! This library computes net balances for a fixed roster of participants from a
//! list of shared expenses and produces a near-minimal set of transfers that
//! settles all debts, with both sync and async processing strategies.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Roster, Expense, Transfer, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::balance`] - Net balance computation from expenses
//!   - [`core::matcher`] - Greedy debtor/creditor transfer matching
//!   - [`core::engine`] - Pipeline orchestration over a roster
//!   - [`core::async`](core::r#async) - Background settlement worker with
//!     watch-published results
//! - [`io`] - CSV and JSON format adapters with sync and async readers
//! - [`strategy`] - Pluggable processing pipelines
//!
//! # Settlement Model
//!
//! Every expense names a payer and the participants who share it. The payer's
//! balance rises by the full amount while each sharer's balance falls by an
//! equal split. A positive balance means the group owes that participant; a
//! negative balance means they owe the group. The matcher walks debtors and
//! creditors in roster order, repeatedly settling the smaller of the two open
//! positions, and ignores residues at or below [`SETTLE_EPSILON`] so split
//! rounding never produces noise transfers.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{compute_net_balances, match_transfers, SettlementEngine, SETTLE_EPSILON};
pub use io::{write_balances_csv, write_transfers_csv};
pub use types::{
    Expense, ExpenseId, NetBalances, ParticipantName, Roster, SettlementError, Transfer,
};
