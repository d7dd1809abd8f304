//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It
//! orchestrates the pipeline by coordinating the SyncReader (CSV
//! input), the SettlementEngine (computation), and the csv_format
//! writers (output), keeping each concern testable on its own.

use crate::cli::ReportKind;
use crate::core::SettlementEngine;
use crate::io::csv_format::{write_balances_csv, write_transfers_csv};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{Expense, SettlementError};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Reads the expense snapshot, settles it inline on the calling thread,
/// and writes the report. Send + Sync so it can be shared in
/// multi-threaded contexts even though it processes on one thread.
#[derive(Debug, Clone)]
pub struct SyncSettlementStrategy {
    engine: SettlementEngine,
    report: ReportKind,
}

impl SyncSettlementStrategy {
    /// Create a strategy for the given engine and report kind
    pub fn new(engine: SettlementEngine, report: ReportKind) -> Self {
        Self { engine, report }
    }
}

impl ProcessingStrategy for SyncSettlementStrategy {
    /// Process expenses from the input file and write the report
    ///
    /// Malformed rows are reported to stderr and skipped; fatal errors
    /// (unreadable input, residual imbalance, write failure) are
    /// returned.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError> {
        let reader = SyncReader::new(input_path, self.engine.roster().clone())?;

        let mut expenses: Vec<Expense> = Vec::new();
        for result in reader {
            match result {
                Ok(expense) => expenses.push(expense),
                Err(e) => eprintln!("Expense record error: {}", e),
            }
        }

        match self.report {
            ReportKind::Transfers => {
                let transfers = self.engine.settle(&expenses)?;
                write_transfers_csv(&transfers, output)
            }
            ReportKind::Balances => {
                let balances = self.engine.compute_balances(&expenses);
                write_balances_csv(self.engine.roster(), &balances, output)
            }
        }
    }
}
