//! Error handling for CSV normalization.
//!
//! Two classes of failure exist. [`FieldError`] describes a single malformed
//! row and is always recovered by the pipeline (the row is dropped and a
//! warning is written). [`NormalizerError`] describes an unrecoverable
//! input/output failure that terminates the run.

use std::path::PathBuf;
use thiserror::Error;

/// Row-level validation failure produced by a field normalizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid timestamp '{value}': expected M/D/YY HH:MM:SS AM/PM ({reason})")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid zip code '{value}': not an integer")]
    InvalidZip { value: String },

    #[error("invalid duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    #[error("row has {found} fields, expected {expected} (missing {field})")]
    MissingField {
        field: &'static str,
        found: usize,
        expected: usize,
    },
}

impl FieldError {
    /// Create a timestamp error from the chrono parse failure
    pub fn invalid_timestamp(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: source.to_string(),
        }
    }

    /// Create a zip code error
    pub fn invalid_zip(value: impl Into<String>) -> Self {
        Self::InvalidZip {
            value: value.into(),
        }
    }

    /// Create a duration error with the reason the value was rejected
    pub fn invalid_duration(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Fatal errors that abort a normalization run
#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to open input {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl NormalizerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classify a failure to open an input file
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputOpen { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
