//! Processing strategy module for the settlement pipeline
//!
//! This module defines the Strategy pattern for complete settlement
//! pipelines, encompassing expense CSV reading, engine computation, and
//! report output. This allows different processing implementations
//! (synchronous, asynchronous background worker) to be selected at
//! runtime.

use crate::cli::{ReportKind, StrategyType};
use crate::core::SettlementEngine;
use crate::types::SettlementError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncSettlementStrategy, WorkerConfig};
pub use sync::SyncSettlementStrategy;

/// Processing strategy trait for complete settlement pipelines
///
/// Each strategy reads expense records from a CSV file, runs the
/// settlement engine, and writes the selected report to the output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process expenses from an input file and write the report
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file of expense records
    /// * `output` - Writer receiving the CSV report
    ///
    /// # Errors
    ///
    /// Returns an error for fatal conditions: the input file cannot be
    /// opened, output cannot be written, or the engine reports a
    /// residual imbalance. Individual malformed expense rows are
    /// reported to stderr and skipped; they never abort the pipeline.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError>;
}

/// Create a processing strategy for the given strategy type
///
/// Factory selecting the pipeline implementation at runtime.
///
/// # Arguments
///
/// * `strategy_type` - Sync or Async
/// * `engine` - The settlement engine (carries the roster)
/// * `report` - Which report the pipeline writes
/// * `config` - Worker configuration for the async strategy (ignored
///   for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    engine: SettlementEngine,
    report: ReportKind,
    config: Option<WorkerConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncSettlementStrategy::new(engine, report)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncSettlementStrategy::new(engine, report, config))
        }
    }
}
