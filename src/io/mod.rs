//! I/O module
//!
//! Handles expense input and settlement output at the engine's
//! function-call boundary. Persistence itself lives outside this crate;
//! these are the format adapters external collaborators use.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, validation,
//!   output serialization)
//! - `json_format` - JSON import/export of expense lists
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch interface

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_csv_record, write_balances_csv, write_transfers_csv, CsvExpenseRecord,
};
pub use json_format::{export_expenses_json, import_expenses_json};
pub use sync_reader::SyncReader;
