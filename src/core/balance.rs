//! Balance Calculator
//!
//! Reduces an expense list into one signed net balance per roster
//! member. Positive means the member is owed money, negative means they
//! owe. The computation is a pure fold over the expenses: it holds no
//! state, performs no I/O, and its result does not depend on expense
//! order.

use crate::types::{Expense, NetBalances, Roster};
use rust_decimal::Decimal;

/// Compute net balances for every roster member
///
/// Every roster member appears in the result, initialized to zero, so
/// members with no activity report a balance of 0. For each expense the
/// payer is credited the full amount and each sharing participant is
/// debited an equal share (`amount / participant count`). A payer who is
/// also a participant nets `amount - share`, which is correct: they
/// still owe their own share.
///
/// Defensive skips (treated as no-ops, not errors):
/// - expenses with an empty participant list
/// - expenses with a non-positive amount
///
/// Names outside the roster are ignored; rigorous membership validation
/// is the input boundary's responsibility. The resulting sum of all
/// balances is zero for well-formed input.
///
/// # Arguments
///
/// * `roster` - The fixed participant roster
/// * `expenses` - Expense records, in any order
pub fn compute_net_balances(roster: &Roster, expenses: &[Expense]) -> NetBalances {
    let mut balances: NetBalances = roster
        .iter()
        .map(|name| (name.clone(), Decimal::ZERO))
        .collect();

    for expense in expenses {
        if expense.participants.is_empty() {
            continue;
        }
        if expense.amount <= Decimal::ZERO {
            continue;
        }

        let share = expense.amount / Decimal::from(expense.participants.len() as u64);

        if let Some(balance) = balances.get_mut(&expense.payer) {
            *balance += expense.amount;
        }
        for participant in &expense.participants {
            if let Some(balance) = balances.get_mut(participant) {
                *balance -= share;
            }
        }
    }

    balances
}
