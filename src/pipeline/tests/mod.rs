//! Test utilities for the row pipeline
//!
//! Provides sample rows and a helper that runs the pipeline over in-memory
//! buffers and hands back both output channels as text.

use crate::models::Record;
use crate::pipeline::{RowPipeline, RunStats};

mod runner_tests;

pub const HEADER: &str =
    "Timestamp,Address,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes";

/// A row where every field is valid
pub const VALID_ROW: &str =
    "4/1/11 11:00:00 AM,\"123 4th St, Anywhere, AA\",94121,Monkey Alberto,1:23:32.123,1:32:33.123,zzsasdfa,I am the very model of a modern major general";

/// Normalized form of [`VALID_ROW`]
pub const VALID_ROW_NORMALIZED: &str =
    "2011-04-01T14:00:00-05:00,\"123 4th St, Anywhere, AA\",94121,MONKEY ALBERTO,5012.123,5553.123,10565.246,I am the very model of a modern major general";

/// Build a record from literal fields
pub fn record(fields: &[&str]) -> Record {
    fields.iter().copied().collect()
}

/// Outcome of an in-memory pipeline run
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub stats: RunStats,
}

/// Run the default pipeline over `input`
pub fn run_pipeline(input: &str) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let stats = RowPipeline::default()
        .run(input.as_bytes(), &mut stdout, &mut stderr)
        .unwrap();

    RunOutput {
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
        stats,
    }
}
