use crate::strategy::WorkerConfig;
use crate::types::{Roster, SettlementError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Settle shared expenses with minimum-transfer matching
#[derive(Parser, Debug)]
#[command(name = "settlement-engine")]
#[command(about = "Settle shared expenses with minimum-transfer matching", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing expense records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Comma-separated list of participant names forming the roster
    #[arg(
        long = "roster",
        value_name = "NAMES",
        help = "Comma-separated participant names (e.g. 'alice,bob,carol')"
    )]
    pub roster: String,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Report to write to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "transfers",
        help = "Report kind: 'transfers' for the settlement plan or 'balances' for net positions"
    )]
    pub report: ReportKind,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of worker threads for the async runtime (default: CPU cores)"
    )]
    pub workers: Option<usize>,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available report kinds
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportKind {
    Transfers,
    Balances,
}

impl CliArgs {
    /// Build the roster from the --roster argument
    ///
    /// Splits the comma-separated list, trims each name, and validates
    /// the result through the roster constructor.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a blank name, or
    /// contains a duplicate.
    pub fn parse_roster(&self) -> Result<Roster, SettlementError> {
        let members = self
            .roster
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();
        Roster::new(members)
    }

    /// Create a WorkerConfig from CLI arguments
    ///
    /// Uses the --workers value if provided, or falls back to defaults.
    /// Invalid values are corrected with warnings on stderr.
    ///
    /// # Returns
    ///
    /// A `WorkerConfig` with values from CLI arguments or defaults.
    pub fn to_worker_config(&self) -> WorkerConfig {
        match self.workers {
            Some(workers) => {
                let default = WorkerConfig::default();
                WorkerConfig::new(workers, default.batch_size)
            }
            None => WorkerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Strategy parsing tests
    #[rstest]
    #[case::default_strategy(&["program", "--roster", "a,b", "input.csv"], StrategyType::Async)]
    #[case::explicit_sync(&["program", "--roster", "a,b", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--roster", "a,b", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    // Report parsing tests
    #[rstest]
    #[case::default_report(&["program", "--roster", "a,b", "input.csv"], ReportKind::Transfers)]
    #[case::explicit_transfers(&["program", "--roster", "a,b", "--report", "transfers", "input.csv"], ReportKind::Transfers)]
    #[case::explicit_balances(&["program", "--roster", "a,b", "--report", "balances", "input.csv"], ReportKind::Balances)]
    fn test_report_parsing(#[case] args: &[&str], #[case] expected: ReportKind) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.report, &expected) {
            (ReportKind::Transfers, ReportKind::Transfers) => (),
            (ReportKind::Balances, ReportKind::Balances) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.report),
        }
    }

    // Roster parsing tests
    #[rstest]
    #[case::simple("alice,bob,carol", vec!["alice", "bob", "carol"])]
    #[case::trims_whitespace(" alice , bob ", vec!["alice", "bob"])]
    #[case::single_member("alice", vec!["alice"])]
    fn test_roster_parsing(#[case] roster_arg: &str, #[case] expected: Vec<&str>) {
        let parsed =
            CliArgs::try_parse_from(["program", "--roster", roster_arg, "input.csv"]).unwrap();
        let roster = parsed.parse_roster().unwrap();
        assert_eq!(roster.members(), expected);
    }

    #[rstest]
    #[case::blank_name("alice,,bob")]
    #[case::duplicate_name("alice,bob,alice")]
    #[case::only_whitespace("  ")]
    fn test_roster_parsing_errors(#[case] roster_arg: &str) {
        let parsed =
            CliArgs::try_parse_from(["program", "--roster", roster_arg, "input.csv"]).unwrap();
        assert!(parsed.parse_roster().is_err());
    }

    // WorkerConfig conversion tests
    #[rstest]
    #[case::all_defaults(&["program", "--roster", "a,b", "input.csv"], num_cpus::get())]
    #[case::custom_workers(&["program", "--roster", "a,b", "--workers", "4", "input.csv"], 4)]
    #[case::zero_workers_fallback(&["program", "--roster", "a,b", "--workers", "0", "input.csv"], num_cpus::get())]
    fn test_worker_config_conversion(#[case] args: &[&str], #[case] expected_workers: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_worker_config();

        assert_eq!(config.worker_threads, expected_workers);
        assert_eq!(config.batch_size, 1024);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program", "--roster", "a,b"])]
    #[case::missing_roster(&["program", "input.csv"])]
    #[case::invalid_strategy(&["program", "--roster", "a,b", "--strategy", "invalid", "input.csv"])]
    #[case::invalid_report(&["program", "--roster", "a,b", "--report", "invalid", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
