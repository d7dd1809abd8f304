//! Asynchronous processing strategy
//!
//! Implementation of the ProcessingStrategy trait that reads the
//! expense file with the async CSV reader and hands the snapshot to a
//! background [`SettlementWorker`](crate::core::SettlementWorker),
//! awaiting the published result. This is the embedding recommended for
//! interactive callers: the computation runs off the submitting task
//! and stale results are discarded if a newer snapshot lands first.
//!
//! # Architecture
//!
//! ```text
//! AsyncSettlementStrategy
//!     ├── WorkerConfig (worker_threads, batch_size)
//!     ├── AsyncReader (batched CSV reading)
//!     └── SettlementWorker (background compute, watch-published state)
//! ```

use crate::cli::ReportKind;
use crate::core::r#async::{await_settlement, SettlementWorker};
use crate::core::SettlementEngine;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{write_balances_csv, write_transfers_csv};
use crate::strategy::ProcessingStrategy;
use crate::types::{Expense, SettlementError};
use std::io::Write;
use std::path::Path;

/// Configuration for the asynchronous strategy
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Worker threads for the tokio runtime
    pub worker_threads: usize,
    /// Number of expense records read per batch
    pub batch_size: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
            batch_size: 1024,
        }
    }
}

impl WorkerConfig {
    /// Create a WorkerConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning on stderr.
    pub fn new(worker_threads: usize, batch_size: usize) -> Self {
        let default = Self::default();

        let worker_threads = if worker_threads == 0 {
            eprintln!(
                "Warning: Invalid worker_threads ({}), using default ({})",
                worker_threads, default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self {
            worker_threads,
            batch_size,
        }
    }
}

/// Asynchronous processing strategy
///
/// Builds a multi-threaded tokio runtime, reads the expense snapshot
/// through the async reader, and resolves the settlement via the
/// background worker's watch channel.
#[derive(Debug, Clone)]
pub struct AsyncSettlementStrategy {
    engine: SettlementEngine,
    report: ReportKind,
    config: WorkerConfig,
}

impl AsyncSettlementStrategy {
    /// Create a strategy for the given engine, report kind, and config
    pub fn new(engine: SettlementEngine, report: ReportKind, config: WorkerConfig) -> Self {
        Self {
            engine,
            report,
            config,
        }
    }

    async fn read_expenses(&self, input_path: &Path) -> Result<Vec<Expense>, SettlementError> {
        let file = tokio::fs::File::open(input_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SettlementError::file_not_found(&input_path.display().to_string())
            } else {
                e.into()
            }
        })?;

        // Wrap the tokio file in a compatibility layer for csv-async.
        let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
        let mut reader = AsyncReader::new(compat_file, self.engine.roster().clone());

        let mut expenses = Vec::new();
        loop {
            let batch = reader.read_batch(self.config.batch_size).await;
            if batch.is_empty() {
                break;
            }
            expenses.extend(batch);
        }

        Ok(expenses)
    }
}

/// Report payload computed inside the runtime, written outside it
enum ReportData {
    Transfers(Vec<crate::types::Transfer>),
    Balances(crate::types::NetBalances),
}

impl ProcessingStrategy for AsyncSettlementStrategy {
    /// Process expenses from the input file and write the report
    ///
    /// The pipeline:
    /// 1. Builds a multi-threaded tokio runtime
    /// 2. Streams the expense CSV through AsyncReader in batches
    /// 3. Submits the snapshot to a SettlementWorker and awaits the
    ///    watch-published outcome (transfers report), or computes
    ///    balances inline (balances report - the balance phase alone
    ///    has no failure mode worth a background task)
    /// 4. Writes the CSV report to the output
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), SettlementError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(|e| SettlementError::Io {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let report = runtime.block_on(async {
            let expenses = self.read_expenses(input_path).await?;

            match self.report {
                ReportKind::Transfers => {
                    let worker = SettlementWorker::new(self.engine.clone());
                    let mut receiver = worker.subscribe();
                    let seq = worker.submit(expenses);
                    let transfers = await_settlement(&mut receiver, seq).await?;
                    Ok::<ReportData, SettlementError>(ReportData::Transfers(transfers))
                }
                ReportKind::Balances => {
                    Ok(ReportData::Balances(self.engine.compute_balances(&expenses)))
                }
            }
        })?;

        match report {
            ReportData::Transfers(transfers) => write_transfers_csv(&transfers, output),
            ReportData::Balances(balances) => {
                write_balances_csv(self.engine.roster(), &balances, output)
            }
        }
    }
}
