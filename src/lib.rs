//! CSV Normalizer Library
//!
//! Reads fixed-layout CSV records and emits a normalized CSV, dropping rows
//! that fail validation with a warning.
//!
//! This library provides tools for:
//! - Converting 12-hour timestamps between fixed UTC offsets into RFC 3339
//! - Quoting addresses, padding zip codes and uppercasing names
//! - Parsing `H:MM:SS.mmm` durations into seconds and recomputing totals
//! - Streaming rows from one or more inputs with lossy UTF-8 decoding
//! - Reporting malformed rows without interrupting the run

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalizers;
pub mod pipeline;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::TimezoneConfig;
pub use error::{FieldError, NormalizerError, Result};
pub use models::{Field, NormalizedRecord, Record};
pub use pipeline::{RecordNormalizer, RowPipeline, RunStats};
