//! Expense and settlement types
//!
//! This module defines the expense record handed to the engine, the
//! derived net-balance mapping, and the settlement transfer produced by
//! the matcher.

use crate::types::participant::{ParticipantName, Roster};
use crate::types::SettlementError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque expense identifier
///
/// Caller-assigned, never reused. Used only for equality and error
/// reporting, never for ordering.
pub type ExpenseId = String;

/// Net balance per participant
///
/// Positive means the participant is owed money; negative means they owe.
/// Derived from the expense list on every computation, never persisted.
pub type NetBalances = HashMap<ParticipantName, Decimal>;

/// A single shared expense
///
/// One participant (the payer) fronted the full amount; the participants
/// listed share the cost equally. The payer may or may not be among the
/// participants - if they are, their net effect is `amount - share`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Caller-assigned unique identifier
    pub id: ExpenseId,

    /// Free-form description; carries no meaning for the engine
    pub description: String,

    /// Total cost fronted by the payer, strictly positive
    pub amount: Decimal,

    /// Who paid the full amount
    pub payer: ParticipantName,

    /// Who shares the cost, non-empty
    pub participants: Vec<ParticipantName>,
}

impl Expense {
    /// Validate an expense against a roster at the input boundary
    ///
    /// The engine core only skips degenerate records defensively;
    /// rejecting them with a diagnostic is the input boundary's job.
    /// Both the CSV and JSON import paths call this before an expense
    /// reaches the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not strictly positive, the
    /// participant list is empty, or the payer or any participant is
    /// not a roster member.
    pub fn validate(&self, roster: &Roster) -> Result<(), SettlementError> {
        if self.amount <= Decimal::ZERO {
            return Err(SettlementError::non_positive_amount(self.amount, &self.id));
        }
        if self.participants.is_empty() {
            return Err(SettlementError::empty_participants(&self.id));
        }
        if !roster.contains(&self.payer) {
            return Err(SettlementError::unknown_participant(&self.payer, &self.id));
        }
        for participant in &self.participants {
            if !roster.contains(participant) {
                return Err(SettlementError::unknown_participant(participant, &self.id));
            }
        }
        Ok(())
    }
}

/// A directed settlement payment
///
/// `from` pays `to` the given amount. Applying every transfer produced
/// for an expense list restores all net balances to zero (within the
/// settle tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    /// The debtor making the payment
    pub from: ParticipantName,

    /// The creditor receiving the payment
    pub to: ParticipantName,

    /// Payment amount, strictly greater than the settle tolerance
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn roster_ab() -> Roster {
        Roster::new(vec!["a".to_string(), "b".to_string()]).unwrap()
    }

    fn expense(amount: &str, payer: &str, participants: &[&str]) -> Expense {
        Expense {
            id: "e1".to_string(),
            description: "groceries".to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            payer: payer.to_string(),
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_expense() {
        assert!(expense("12.50", "a", &["a", "b"]).validate(&roster_ab()).is_ok());
    }

    #[rstest]
    #[case::zero_amount(expense("0", "a", &["a", "b"]))]
    #[case::negative_amount(expense("-1", "a", &["a", "b"]))]
    #[case::no_participants(expense("10", "a", &[]))]
    #[case::unknown_payer(expense("10", "mallory", &["a", "b"]))]
    #[case::unknown_participant(expense("10", "a", &["a", "mallory"]))]
    fn test_validate_rejects_malformed_expense(#[case] malformed: Expense) {
        assert!(malformed.validate(&roster_ab()).is_err());
    }
}
