//! Streaming row pipeline
//!
//! Reads rows in order, passes the first row through as the header and
//! normalizes every following row. A row that fails validation is dropped
//! with one warning line on the diagnostics channel; it never stops the run.
//! Only I/O failures are returned as errors.

use std::io::{Read, Write};
use tracing::{debug, info};

use super::record::RecordNormalizer;
use super::sink::RecordSink;
use super::source::RecordSource;
use super::stats::RunStats;
use crate::config::TimezoneConfig;
use crate::constants::OMITTED_ROW_PREFIX;
use crate::error::{FieldError, Result};
use crate::models::Record;

/// Drives records from input to output through the [`RecordNormalizer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RowPipeline {
    normalizer: RecordNormalizer,
}

impl RowPipeline {
    pub fn new(config: TimezoneConfig) -> Self {
        Self {
            normalizer: RecordNormalizer::new(config),
        }
    }

    /// Normalize a single input stream
    pub fn run<R, W, E>(&self, input: R, output: W, diagnostics: E) -> Result<RunStats>
    where
        R: Read,
        W: Write,
        E: Write,
    {
        self.run_inputs(std::iter::once(Ok(input)), output, diagnostics)
    }

    /// Normalize several inputs as one logical stream.
    ///
    /// Inputs are opened lazily, in order. Only the first row of the first
    /// input is treated as the header.
    pub fn run_inputs<I, R, W, E>(
        &self,
        inputs: I,
        output: W,
        mut diagnostics: E,
    ) -> Result<RunStats>
    where
        I: IntoIterator<Item = Result<R>>,
        R: Read,
        W: Write,
        E: Write,
    {
        let mut sink = RecordSink::new(output);
        let mut stats = RunStats::new();
        let mut header_seen = false;

        for input in inputs {
            for record in RecordSource::new(input?) {
                let record = record?;

                if !header_seen {
                    sink.write_header(&record)?;
                    header_seen = true;
                    debug!("Header passed through with {} fields", record.fields().len());
                    continue;
                }

                stats.rows_read += 1;
                self.process_record(&record, &mut sink, &mut diagnostics, &mut stats)?;
            }
        }

        sink.flush()?;
        diagnostics.flush()?;

        info!("{}", stats.summary());
        Ok(stats)
    }

    fn process_record<W, E>(
        &self,
        record: &Record,
        sink: &mut RecordSink<W>,
        diagnostics: &mut E,
        stats: &mut RunStats,
    ) -> Result<()>
    where
        W: Write,
        E: Write,
    {
        match self.normalizer.normalize(record) {
            Ok(normalized) => {
                sink.write_record(&normalized)?;
                stats.rows_written += 1;
            }
            Err(e) => {
                stats.rows_dropped += 1;
                debug!("Dropped row {}: {}", stats.rows_read, e);
                report_omitted(diagnostics, &e)?;
            }
        }
        Ok(())
    }
}

/// Write the warning line for a dropped row
fn report_omitted<E: Write>(diagnostics: &mut E, error: &FieldError) -> Result<()> {
    writeln!(diagnostics, "{}{}", OMITTED_ROW_PREFIX, error)?;
    Ok(())
}
