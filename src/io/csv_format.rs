//! CSV format handling for expense input and settlement output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvExpenseRecord structure for deserialization
//! - Conversion from CSV records to validated domain expenses
//! - Transfer and balance output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input Format
//!
//! Header `id,description,amount,payer,participants`, one expense per
//! row. The `participants` field holds a `;`-separated list of roster
//! names, e.g. `alice;bob;carol`.

use crate::types::{Expense, NetBalances, Roster, SettlementError, Transfer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Separator between names inside the `participants` CSV field
pub const PARTICIPANT_SEPARATOR: char = ';';

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// id, description, amount, payer, participants
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvExpenseRecord {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub payer: String,
    pub participants: String,
}

/// Convert a CsvExpenseRecord to a validated Expense
///
/// This function:
/// - Parses the amount string into a Decimal
/// - Splits the participants field on `;`, trimming each name and
///   dropping duplicates while preserving first-occurrence order
///   (participants form a set)
/// - Validates the result against the roster: positive amount,
///   non-empty participants, payer and participants all roster members
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
/// * `roster` - The roster to validate names against
///
/// # Errors
///
/// Returns a parse error for an unparseable amount, or the validation
/// error reported by [`Expense::validate`] for semantic problems.
pub fn convert_csv_record(
    record: CsvExpenseRecord,
    roster: &Roster,
) -> Result<Expense, SettlementError> {
    let amount = Decimal::from_str(record.amount.trim()).map_err(|_| SettlementError::Parse {
        line: None,
        message: format!(
            "Invalid amount '{}' for expense {}",
            record.amount, record.id
        ),
    })?;

    let mut participants: Vec<String> = Vec::new();
    for name in record.participants.split(PARTICIPANT_SEPARATOR) {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if !participants.iter().any(|existing| existing == name) {
            participants.push(name.to_string());
        }
    }

    let expense = Expense {
        id: record.id,
        description: record.description,
        amount,
        payer: record.payer.trim().to_string(),
        participants,
    };
    expense.validate(roster)?;

    Ok(expense)
}

/// Write settlement transfers to CSV format
///
/// Writes transfers in CSV format with columns: from, to, amount.
/// Transfer order is preserved (it is already deterministic) and
/// amounts are formatted to two decimal places.
///
/// # Errors
///
/// Returns an I/O-category error if writing or flushing fails.
pub fn write_transfers_csv(
    transfers: &[Transfer],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["from", "to", "amount"])?;

    for transfer in transfers {
        writer.write_record(&[
            transfer.from.clone(),
            transfer.to.clone(),
            format!("{:.2}", transfer.amount),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write net balances to CSV format
///
/// Writes balances in CSV format with columns: participant, balance,
/// one row per roster member in roster order, two decimal places.
/// Positive balances are owed money, negative balances owe.
///
/// # Errors
///
/// Returns an I/O-category error if writing or flushing fails.
pub fn write_balances_csv(
    roster: &Roster,
    balances: &NetBalances,
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["participant", "balance"])?;

    for name in roster.iter() {
        let balance = balances.get(name).copied().unwrap_or(Decimal::ZERO);
        writer.write_record(&[name.clone(), format!("{:.2}", balance)])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn roster_abc() -> Roster {
        Roster::new(vec![
            "alice".to_string(),
            "bob".to_string(),
            "carol".to_string(),
        ])
        .unwrap()
    }

    fn record(id: &str, amount: &str, payer: &str, participants: &str) -> CsvExpenseRecord {
        CsvExpenseRecord {
            id: id.to_string(),
            description: "dinner".to_string(),
            amount: amount.to_string(),
            payer: payer.to_string(),
            participants: participants.to_string(),
        }
    }

    #[test]
    fn test_convert_valid_record() {
        let expense =
            convert_csv_record(record("e1", "90.00", "alice", "alice;bob;carol"), &roster_abc())
                .unwrap();

        assert_eq!(expense.id, "e1");
        assert_eq!(expense.amount, Decimal::from_str("90.00").unwrap());
        assert_eq!(expense.payer, "alice");
        assert_eq!(expense.participants, vec!["alice", "bob", "carol"]);
    }

    #[rstest]
    #[case::padded_names("e1", "12.00", " alice ", " bob ; carol ")]
    #[case::padded_amount("e1", "  12.00  ", "alice", "bob;carol")]
    fn test_convert_trims_whitespace(
        #[case] id: &str,
        #[case] amount: &str,
        #[case] payer: &str,
        #[case] participants: &str,
    ) {
        let expense =
            convert_csv_record(record(id, amount, payer, participants), &roster_abc()).unwrap();
        assert_eq!(expense.payer, "alice");
        assert_eq!(expense.participants, vec!["bob", "carol"]);
    }

    #[test]
    fn test_convert_deduplicates_participants() {
        // Participants form a set; repeats collapse to the first mention.
        let expense = convert_csv_record(
            record("e1", "30.00", "alice", "bob;carol;bob"),
            &roster_abc(),
        )
        .unwrap();
        assert_eq!(expense.participants, vec!["bob", "carol"]);
    }

    #[rstest]
    #[case::bad_amount(record("e1", "ninety", "alice", "alice;bob"), "Invalid amount")]
    #[case::zero_amount(record("e1", "0", "alice", "alice;bob"), "Non-positive amount")]
    #[case::negative_amount(record("e1", "-4.50", "alice", "alice;bob"), "Non-positive amount")]
    #[case::no_participants(record("e1", "10", "alice", " ; "), "has no participants")]
    #[case::unknown_payer(record("e1", "10", "mallory", "alice;bob"), "Unknown participant")]
    #[case::unknown_sharer(record("e1", "10", "alice", "alice;mallory"), "Unknown participant")]
    fn test_convert_errors(#[case] record: CsvExpenseRecord, #[case] expected: &str) {
        let error = convert_csv_record(record, &roster_abc()).unwrap_err();
        assert!(
            error.to_string().contains(expected),
            "unexpected error: {}",
            error
        );
    }

    #[rstest]
    #[case::empty(vec![], "from,to,amount\n")]
    #[case::single(
        vec![Transfer {
            from: "bob".to_string(),
            to: "alice".to_string(),
            amount: Decimal::from(30),
        }],
        "from,to,amount\nbob,alice,30.00\n"
    )]
    #[case::order_preserved(
        vec![
            Transfer {
                from: "bob".to_string(),
                to: "alice".to_string(),
                amount: Decimal::from_str("10.5").unwrap(),
            },
            Transfer {
                from: "carol".to_string(),
                to: "alice".to_string(),
                amount: Decimal::from(20),
            },
        ],
        "from,to,amount\nbob,alice,10.50\ncarol,alice,20.00\n"
    )]
    fn test_write_transfers_csv(#[case] transfers: Vec<Transfer>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_transfers_csv(&transfers, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_balances_csv_roster_order() {
        let balances: NetBalances = [
            ("carol".to_string(), Decimal::from(-30)),
            ("alice".to_string(), Decimal::from(60)),
            ("bob".to_string(), Decimal::from(-30)),
        ]
        .into_iter()
        .collect();

        let mut output = Vec::new();
        write_balances_csv(&roster_abc(), &balances, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "participant,balance\nalice,60.00\nbob,-30.00\ncarol,-30.00\n"
        );
    }

    #[test]
    fn test_write_balances_csv_defaults_missing_members_to_zero() {
        let balances = NetBalances::new();
        let mut output = Vec::new();
        write_balances_csv(&roster_abc(), &balances, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "participant,balance\nalice,0.00\nbob,0.00\ncarol,0.00\n"
        );
    }
}
