//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over expense records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Expense, SettlementError>` for each CSV row:
//!
//! ```no_run
//! use settlement_engine::io::sync_reader::SyncReader;
//! use settlement_engine::types::Roster;
//! use std::path::Path;
//!
//! let roster = Roster::new(vec!["alice".into(), "bob".into()]).unwrap();
//! let reader = SyncReader::new(Path::new("expenses.csv"), roster).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(expense) => println!("Loaded expense: {:?}", expense),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors (parse failures, validation failures) are
//!   yielded as Err variants so the caller can skip and continue
//!
//! # Memory Efficiency
//!
//! Records are read one at a time; memory usage is O(1) per record, not
//! O(file size).

use crate::io::csv_format::{convert_csv_record, CsvExpenseRecord};
use crate::types::{Expense, Roster, SettlementError};
use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over validated expense records.
pub struct SyncReader {
    records: DeserializeRecordsIntoIter<File, CsvExpenseRecord>,
    roster: Roster,
}

impl std::fmt::Debug for SyncReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncReader")
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The
    /// CSV reader trims whitespace from all fields and uses an 8KB
    /// buffer.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    /// * `roster` - Roster used to validate each record
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::FileNotFound`] if the path does not
    /// exist, or an I/O error if the file cannot be opened.
    pub fn new(path: &Path, roster: Roster) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SettlementError::file_not_found(&path.display().to_string())
            } else {
                e.into()
            }
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            records: reader.into_deserialize(),
            roster,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<Expense, SettlementError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        Some(convert_csv_record(record, &self.roster))
    }
}
