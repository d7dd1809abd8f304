//! Transfer Matcher
//!
//! Greedily pairs debtors against creditors to settle all net balances
//! with few transfers. The matching is a single deterministic pass: both
//! partitions keep roster order, and two cursors walk them front to
//! front, settling `min(debt, credit)` at each step. The result is not
//! necessarily the theoretical minimum over all matchings, but it is
//! bounded by `|creditors| + |debtors| - 1` transfers and is identical
//! for identical inputs.

use crate::core::SETTLE_EPSILON;
use crate::types::{NetBalances, ParticipantName, Roster, SettlementError, Transfer};
use rust_decimal::Decimal;

/// A participant with an outstanding amount still to settle
///
/// Amounts are kept positive for both sides; debtor balances are negated
/// during partitioning.
#[derive(Debug, Clone)]
struct OpenPosition {
    name: ParticipantName,
    amount: Decimal,
}

/// Match debtors against creditors and produce settlement transfers
///
/// Partitions roster members into creditors (balance above the settle
/// tolerance) and debtors (balance below its negation), preserving
/// roster order within each partition, then walks both lists with a
/// greedy two-cursor pass. Members whose balance lies inside the dead
/// zone `[-0.01, 0.01]` are treated as already settled and never appear
/// in a transfer.
///
/// Applying every returned transfer restores all balances to (near)
/// zero. No transfer is a self-payment, and every transfer amount is
/// strictly greater than the tolerance.
///
/// # Arguments
///
/// * `roster` - The fixed participant roster (iteration order is the
///   deterministic tie-break)
/// * `balances` - Net balance per roster member
///
/// # Errors
///
/// Returns [`SettlementError::ResidualImbalance`] if one side exhausts
/// while the other retains an amount beyond the tolerance. Total credits
/// equal total debits for balances produced by the balance calculator,
/// so a residual signals a broken zero-sum invariant upstream; it is
/// surfaced rather than silently dropped, and no transfer list is
/// returned.
pub fn match_transfers(
    roster: &Roster,
    balances: &NetBalances,
) -> Result<Vec<Transfer>, SettlementError> {
    let mut creditors: Vec<OpenPosition> = Vec::new();
    let mut debtors: Vec<OpenPosition> = Vec::new();

    for name in roster.iter() {
        let balance = balances.get(name).copied().unwrap_or(Decimal::ZERO);
        if balance > SETTLE_EPSILON {
            creditors.push(OpenPosition {
                name: name.clone(),
                amount: balance,
            });
        } else if balance < -SETTLE_EPSILON {
            debtors.push(OpenPosition {
                name: name.clone(),
                amount: -balance,
            });
        }
    }

    let mut transfers = Vec::new();
    let mut debtor_idx = 0;
    let mut creditor_idx = 0;

    while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
        let settle_amount = debtors[debtor_idx]
            .amount
            .min(creditors[creditor_idx].amount);

        if settle_amount > SETTLE_EPSILON {
            transfers.push(Transfer {
                from: debtors[debtor_idx].name.clone(),
                to: creditors[creditor_idx].name.clone(),
                amount: settle_amount,
            });
        }

        debtors[debtor_idx].amount -= settle_amount;
        creditors[creditor_idx].amount -= settle_amount;

        // Both cursors may advance in the same step when the amounts tie.
        if debtors[debtor_idx].amount < SETTLE_EPSILON {
            debtor_idx += 1;
        }
        if creditors[creditor_idx].amount < SETTLE_EPSILON {
            creditor_idx += 1;
        }
    }

    for position in debtors[debtor_idx..]
        .iter()
        .chain(creditors[creditor_idx..].iter())
    {
        if position.amount > SETTLE_EPSILON {
            return Err(SettlementError::residual_imbalance(
                &position.name,
                position.amount,
            ));
        }
    }

    Ok(transfers)
}
