//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading of expense records from an async byte source,
//! used by the asynchronous processing strategy. Format and validation
//! concerns are delegated to the csv_format module, same as the
//! synchronous path.

use crate::io::csv_format::{convert_csv_record, CsvExpenseRecord};
use crate::types::{Expense, Roster};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Reads expense records in batches while maintaining streaming
/// behavior with constant memory usage per batch.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    roster: Roster,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async byte source
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    /// * `roster` - Roster used to validate each record
    pub fn new(reader: R, roster: Roster) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader, roster }
    }

    /// Read a batch of expense records
    ///
    /// Reads up to `batch_size` records, converting and validating each
    /// against the roster. Invalid records are reported to stderr and
    /// skipped, matching the recoverable-error policy of the pipeline.
    ///
    /// # Returns
    ///
    /// The successfully converted expenses; an empty vector signals end
    /// of input.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Expense> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvExpenseRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(record)) => match convert_csv_record(record, &self.roster) {
                    Ok(expense) => batch.push(expense),
                    Err(e) => eprintln!("Expense record error: {}", e),
                },
                Some(Err(e)) => eprintln!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}
