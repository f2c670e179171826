use anyhow::Context;
use clap::Parser;
use csv_normalizer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let result = commands::run(args).context("Normalization failed");

    match result {
        Ok(_stats) => {
            // Row-level failures were already reported and do not affect the exit code
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
