//! Output adapter joining fields into delimited lines
//!
//! Fields are written verbatim with no quoting, so the address normalizer's
//! own quoting is the only quoting that reaches the output. Every line is
//! flushed as soon as it is written.

use crate::constants::DELIMITER;
use crate::error::Result;
use crate::models::{NormalizedRecord, Record};
use csv::{QuoteStyle, Terminator};
use std::io::Write;

/// Writes rows to the primary output
pub struct RecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordSink<W> {
    pub fn new(output: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(output);

        Self { writer }
    }

    /// Re-join the header row exactly as it was split
    pub fn write_header(&mut self, header: &Record) -> Result<()> {
        self.write_line(header.fields())
    }

    pub fn write_record(&mut self, record: &NormalizedRecord) -> Result<()> {
        self.write_line(record.as_fields())
    }

    fn write_line<I, T>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
