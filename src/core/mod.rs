//! Core settlement logic
//!
//! This module contains the two algorithmic phases of the settlement
//! engine and their orchestration:
//! - `balance` - Balance Calculator (expenses to net balances)
//! - `matcher` - Transfer Matcher (net balances to settlement transfers)
//! - `engine` - SettlementEngine chaining both phases over a fixed roster
//! - `async` - Background recomputation with stale-result discard

use rust_decimal::Decimal;

pub mod r#async;
pub mod balance;
pub mod engine;
pub mod matcher;

pub use balance::compute_net_balances;
pub use engine::SettlementEngine;
pub use matcher::match_transfers;
pub use r#async::{await_settlement, ComputationState, SettlementWorker};

/// Settle tolerance: 0.01, the smallest representable two-decimal
/// currency step.
///
/// Balances within `[-0.01, 0.01]` are treated as exactly settled and
/// excluded from matching, and no transfer of 0.01 or less is emitted.
/// Amounts are decimal, so this is purely a currency-rounding dead zone,
/// not a floating-point tolerance.
pub const SETTLE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
