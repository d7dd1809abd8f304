//! Error types for the settlement engine
//!
//! This module defines all error types that can occur while validating
//! input and computing settlements. Errors are descriptive and suitable
//! for CLI output.
//!
//! # Error Categories
//!
//! - **Roster Errors**: empty roster, blank or duplicate names
//! - **Expense Validation Errors**: unknown participants, non-positive
//!   amounts, empty participant lists (raised at the I/O boundary)
//! - **Internal Errors**: residual imbalance left by the matcher, which
//!   signals a broken zero-sum invariant and is never absorbed
//! - **File I/O and Format Errors**: file not found, CSV/JSON problems

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the settlement engine
///
/// Each variant carries the context needed to diagnose the problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    /// Roster was constructed with no members
    #[error("Roster must contain at least one participant")]
    EmptyRoster,

    /// Roster contained a blank name
    #[error("Roster member at position {position} is blank")]
    BlankParticipant {
        /// Zero-based position of the blank entry
        position: usize,
    },

    /// Roster contained the same name twice
    #[error("Duplicate roster member '{name}'")]
    DuplicateParticipant {
        /// The duplicated name
        name: String,
    },

    /// An expense references a name outside the roster
    ///
    /// Raised during input validation; such records never reach the core.
    #[error("Unknown participant '{name}' in expense {expense}")]
    UnknownParticipant {
        /// The unrecognized name
        name: String,
        /// Identifier of the offending expense
        expense: String,
    },

    /// An expense amount is zero or negative
    ///
    /// Raised during input validation. The calculator additionally skips
    /// such records defensively if one slips through.
    #[error("Non-positive amount {amount} in expense {expense}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
        /// Identifier of the offending expense
        expense: String,
    },

    /// An expense has no participants to share the cost
    ///
    /// Raised during input validation. Inside the calculator the same
    /// condition is a silent no-op skip.
    #[error("Expense {expense} has no participants")]
    EmptyParticipants {
        /// Identifier of the offending expense
        expense: String,
    },

    /// The matcher exhausted one side with the other side unsettled
    ///
    /// Internal and fatal: the zero-sum invariant of the balance
    /// calculator was broken. No transfer list is produced.
    #[error("Residual unmatched balance of {amount} for '{participant}' after settlement")]
    ResidualImbalance {
        /// Participant left with an unmatched balance
        participant: String,
        /// The unmatched amount (positive, beyond the settle tolerance)
        amount: Decimal,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error
    ///
    /// Recoverable at the pipeline level - the malformed record is
    /// reported and skipped, processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {message}")]
    Json {
        /// Description of the JSON error
        message: String,
    },
}

impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SettlementError {
    fn from(error: serde_json::Error) -> Self {
        SettlementError::Json {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SettlementError {
    /// Create a DuplicateParticipant error
    pub fn duplicate_participant(name: &str) -> Self {
        SettlementError::DuplicateParticipant {
            name: name.to_string(),
        }
    }

    /// Create an UnknownParticipant error
    pub fn unknown_participant(name: &str, expense: &str) -> Self {
        SettlementError::UnknownParticipant {
            name: name.to_string(),
            expense: expense.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal, expense: &str) -> Self {
        SettlementError::NonPositiveAmount {
            amount,
            expense: expense.to_string(),
        }
    }

    /// Create an EmptyParticipants error
    pub fn empty_participants(expense: &str) -> Self {
        SettlementError::EmptyParticipants {
            expense: expense.to_string(),
        }
    }

    /// Create a ResidualImbalance error
    pub fn residual_imbalance(participant: &str, amount: Decimal) -> Self {
        SettlementError::ResidualImbalance {
            participant: participant.to_string(),
            amount,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SettlementError::FileNotFound {
            path: path.to_string(),
        }
    }
}
