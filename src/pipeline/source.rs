//! Input adapters: opening inputs and splitting them into records
//!
//! Rows are split by the `csv` crate (RFC 4180 quoting). Fields are read as
//! raw bytes and decoded lossily, so invalid UTF-8 becomes U+FFFD instead
//! of failing the run.

use crate::constants::{DELIMITER, STDIN_PATH};
use crate::error::{NormalizerError, Result};
use crate::models::Record;
use csv::ByteRecord;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a stream of rows comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    Stdin,
    File(PathBuf),
}

impl InputSpec {
    /// Interpret a command-line path, where `-` means standard input
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new(STDIN_PATH) {
            InputSpec::Stdin
        } else {
            InputSpec::File(path.to_path_buf())
        }
    }

    /// Build the input list, falling back to stdin when no paths are given
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            vec![InputSpec::Stdin]
        } else {
            paths.iter().map(|path| Self::from_path(path)).collect()
        }
    }

    /// Open the input for reading
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSpec::Stdin => {
                debug!("Reading from standard input");
                Ok(Box::new(io::stdin().lock()))
            }
            InputSpec::File(path) => {
                debug!("Reading from {}", path.display());
                let file =
                    File::open(path).map_err(|e| NormalizerError::input_open(path.clone(), e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Streams records out of a CSV byte source
pub struct RecordSource<R: Read> {
    reader: csv::Reader<R>,
    buffer: ByteRecord,
}

impl<R: Read> RecordSource<R> {
    pub fn new(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(DELIMITER)
            .from_reader(input);

        Self {
            reader,
            buffer: ByteRecord::new(),
        }
    }

    /// Read the next record, or `None` at end of input
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if !self.reader.read_byte_record(&mut self.buffer)? {
            return Ok(None);
        }

        Ok(Some(
            self.buffer
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        ))
    }
}

impl<R: Read> Iterator for RecordSource<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
