//! Settlement engine
//!
//! Chains the Balance Calculator and the Transfer Matcher over a fixed
//! roster. The engine is a pure function of its inputs: it owns no state
//! across calls, caches nothing, and is safe to share between threads.

use crate::core::{balance, matcher};
use crate::types::{Expense, NetBalances, Roster, SettlementError, Transfer};

/// Settlement engine over a fixed roster
///
/// Each call recomputes from scratch: expenses in, net balances or
/// settlement transfers out. Callers that want memoization can key a
/// cache on their own input snapshot; the engine deliberately provides
/// none.
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    roster: Roster,
}

impl SettlementEngine {
    /// Create an engine for the given roster
    pub fn new(roster: Roster) -> Self {
        SettlementEngine { roster }
    }

    /// The roster this engine settles over
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Compute net balances for an expense snapshot
    ///
    /// Every roster member appears in the result; see
    /// [`balance::compute_net_balances`] for the per-expense rules.
    pub fn compute_balances(&self, expenses: &[Expense]) -> NetBalances {
        balance::compute_net_balances(&self.roster, expenses)
    }

    /// Compute the settlement transfers for an expense snapshot
    ///
    /// Produces an ordered transfer list that zeroes every balance, or
    /// an empty list if the snapshot is empty or already settled.
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::ResidualImbalance`] if the matcher is
    /// left with an unmatched balance, which signals a broken zero-sum
    /// invariant. No partial transfer list is ever returned.
    pub fn settle(&self, expenses: &[Expense]) -> Result<Vec<Transfer>, SettlementError> {
        let balances = self.compute_balances(expenses);
        matcher::match_transfers(&self.roster, &balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SETTLE_EPSILON;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn engine_abc() -> SettlementEngine {
        let roster =
            Roster::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap();
        SettlementEngine::new(roster)
    }

    fn expense(id: &str, amount: &str, payer: &str, participants: &[&str]) -> Expense {
        Expense {
            id: id.to_string(),
            description: String::new(),
            amount: Decimal::from_str(amount).unwrap(),
            payer: payer.to_string(),
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn transfer(from: &str, to: &str, amount: &str) -> Transfer {
        Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    #[test]
    fn test_no_expenses_no_transfers() {
        let transfers = engine_abc().settle(&[]).unwrap();
        assert!(transfers.is_empty());
    }

    #[test]
    fn test_single_shared_expense() {
        // 90 by a for everyone -> b and c each pay a 30
        let transfers = engine_abc()
            .settle(&[expense("e1", "90", "a", &["a", "b", "c"])])
            .unwrap();
        assert_eq!(
            transfers,
            vec![transfer("b", "a", "30"), transfer("c", "a", "30")]
        );
    }

    #[test]
    fn test_two_expenses() {
        // Balances end at a +30, b -10, c -20.
        let transfers = engine_abc()
            .settle(&[
                expense("e1", "60", "a", &["a", "b"]),
                expense("e2", "40", "b", &["b", "c"]),
            ])
            .unwrap();
        assert_eq!(
            transfers,
            vec![transfer("b", "a", "10"), transfer("c", "a", "20")]
        );
    }

    #[test]
    fn test_settlement_completeness() {
        let engine = engine_abc();
        let expenses = vec![
            expense("e1", "73.40", "a", &["a", "b", "c"]),
            expense("e2", "12.99", "b", &["a", "b"]),
            expense("e3", "45.00", "c", &["b", "c"]),
        ];

        let mut balances = engine.compute_balances(&expenses);
        for t in engine.settle(&expenses).unwrap() {
            *balances.get_mut(&t.from).unwrap() += t.amount;
            *balances.get_mut(&t.to).unwrap() -= t.amount;
        }
        assert!(balances.values().all(|b| b.abs() <= SETTLE_EPSILON));
    }

    #[test]
    fn test_resettlement_is_idempotent() {
        // Feeding the emitted transfers back as expenses (paid by the
        // debtor, sole participant the creditor) must settle to nothing.
        let engine = engine_abc();
        let expenses = vec![
            expense("e1", "90", "a", &["a", "b", "c"]),
            expense("e2", "40", "b", &["b", "c"]),
        ];

        let synthetic: Vec<Expense> = engine
            .settle(&expenses)
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, t)| Expense {
                id: format!("settle-{}", i),
                description: String::new(),
                amount: t.amount,
                payer: t.from,
                participants: vec![t.to],
            })
            .collect();

        let mut combined = expenses;
        combined.extend(synthetic);
        assert!(engine.settle(&combined).unwrap().is_empty());
    }

    #[test]
    fn test_already_settled_within_tolerance() {
        // 0.01 by a for b leaves both inside the dead zone.
        let transfers = engine_abc()
            .settle(&[expense("e1", "0.01", "a", &["b"])])
            .unwrap();
        assert!(transfers.is_empty());
    }

    #[test]
    fn test_engine_is_reusable_across_snapshots() {
        let engine = engine_abc();
        let first = engine
            .settle(&[expense("e1", "90", "a", &["a", "b", "c"])])
            .unwrap();
        let second = engine.settle(&[]).unwrap();
        let third = engine
            .settle(&[expense("e1", "90", "a", &["a", "b", "c"])])
            .unwrap();

        assert_eq!(first, third);
        assert!(second.is_empty());
    }
}
