//! Core data structures for CSV normalization.
//!
//! Defines the positional record layout and the normalized record
//! produced by the pipeline.

use crate::constants::{FIELD_NAMES, RECORD_WIDTH};
use crate::error::FieldError;

/// Positional fields of an input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Address,
    Zip,
    FullName,
    FooDuration,
    BarDuration,
    TotalDuration,
    Notes,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; RECORD_WIDTH] = [
        Field::Timestamp,
        Field::Address,
        Field::Zip,
        Field::FullName,
        Field::FooDuration,
        Field::BarDuration,
        Field::TotalDuration,
        Field::Notes,
    ];

    /// Zero-based column position
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as it appears in the conventional header
    pub fn name(self) -> &'static str {
        FIELD_NAMES[self.index()]
    }
}

/// One input row, fields identified by position only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Raw value of a field, or `MissingField` when the row is too short
    pub fn get(&self, field: Field) -> Result<&str, FieldError> {
        self.fields
            .get(field.index())
            .map(String::as_str)
            .ok_or(FieldError::MissingField {
                field: field.name(),
                found: self.fields.len(),
                expected: RECORD_WIDTH,
            })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A fully validated record in canonical form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub timestamp: String,
    pub address: String,
    pub zip: String,
    pub full_name: String,
    pub foo_duration: String,
    pub bar_duration: String,
    pub total_duration: String,
    pub notes: String,
}

impl NormalizedRecord {
    /// Fields in output column order
    pub fn as_fields(&self) -> [&str; RECORD_WIDTH] {
        [
            &self.timestamp,
            &self.address,
            &self.zip,
            &self.full_name,
            &self.foo_duration,
            &self.bar_duration,
            &self.total_duration,
            &self.notes,
        ]
    }
}
