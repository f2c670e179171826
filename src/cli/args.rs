//! Command-line argument definitions for the CSV normalizer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::pipeline::InputSpec;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the CSV normalizer
///
/// Reads fixed-layout CSV records and writes the normalized CSV to standard
/// output. Rows that fail validation are dropped with a warning on standard
/// error.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv_normalizer",
    version,
    about = "Normalize fixed-layout CSV records from files or standard input",
    long_about = "Reads CSV rows with the columns Timestamp, Address, ZIP, FullName, FooDuration, \
                  BarDuration, TotalDuration and Notes, converts timestamps from US/Pacific to \
                  US/Eastern, pads zip codes, uppercases names, converts durations to seconds and \
                  recomputes the total. Invalid rows are omitted with a warning on stderr."
)]
pub struct Args {
    /// Input CSV files, read in order as one stream
    ///
    /// Use `-` for standard input. Standard input is read when no files are given.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Row warnings are still written.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a run summary to stderr when processing finishes
    #[arg(long = "summary")]
    pub summary: bool,
}

impl Args {
    /// Get the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Inputs to read, in order
    pub fn input_specs(&self) -> Vec<InputSpec> {
        InputSpec::from_paths(&self.inputs)
    }
}
