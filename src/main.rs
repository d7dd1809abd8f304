//! Settlement Engine CLI
//!
//! Command-line interface for settling shared expenses from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --roster alice,bob,carol expenses.csv > transfers.csv
//! cargo run -- --roster alice,bob,carol --strategy sync expenses.csv > transfers.csv
//! cargo run -- --roster alice,bob,carol --report balances expenses.csv > balances.csv
//! cargo run -- --roster alice,bob,carol --strategy async --workers 4 expenses.csv > transfers.csv
//! ```
//!
//! The program reads expense records from the input CSV file, computes each
//! participant's net balance against the roster, matches debtors to creditors
//! with the greedy minimum-transfer pass, and writes the selected report to
//! stdout.
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV reading with inline settlement
//! - **async**: Asynchronous batch reading with a background settlement worker (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid roster, file not found, residual imbalance, etc.)

use settlement_engine::cli;
use settlement_engine::core::SettlementEngine;
use settlement_engine::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Build and validate the roster before touching the input file
    let roster = match args.parse_roster() {
        Ok(roster) => roster,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let engine = SettlementEngine::new(roster);

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_worker_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, engine, args.report, config)
    };

    // Process expenses using the selected strategy
    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
