//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `participant`: Participant names and the fixed roster
//! - `expense`: Expense records, net balances, and transfers
//! - `error`: Error types for the settlement engine

pub mod error;
pub mod expense;
pub mod participant;

pub use error::SettlementError;
pub use expense::{Expense, ExpenseId, NetBalances, Transfer};
pub use participant::{ParticipantName, Roster};
