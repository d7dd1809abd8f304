//! JSON import and export of expense lists
//!
//! Expense lists round-trip through a JSON array so they can be backed
//! up and restored. Amounts serialize as decimal strings, which keeps
//! the round trip exact. Import validates every record against the
//! roster with the same rules as the CSV path; unlike CSV streaming,
//! import is all-or-nothing so a restore never half-applies.

use crate::types::{Expense, Roster, SettlementError};

/// Serialize an expense list to pretty-printed JSON
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn export_expenses_json(expenses: &[Expense]) -> Result<String, SettlementError> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

/// Deserialize and validate an expense list from JSON
///
/// # Arguments
///
/// * `text` - A JSON array of expense objects
/// * `roster` - The roster to validate names against
///
/// # Errors
///
/// Returns a JSON error for malformed input, or the first validation
/// error if any record fails [`Expense::validate`]. On error nothing is
/// returned: a partial import is never produced.
pub fn import_expenses_json(text: &str, roster: &Roster) -> Result<Vec<Expense>, SettlementError> {
    let expenses: Vec<Expense> = serde_json::from_str(text)?;

    for expense in &expenses {
        expense.validate(roster)?;
    }

    Ok(expenses)
}
