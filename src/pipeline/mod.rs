//! Row pipeline for fixed-layout CSV normalization
//!
//! This module turns a byte stream of CSV rows into normalized output lines,
//! dropping malformed rows with a diagnostic.
//!
//! ## Architecture
//!
//! - [`source`] - Opening inputs and splitting bytes into records
//! - [`record`] - Applying the field normalizers to one record
//! - [`sink`] - Joining normalized fields into output lines
//! - [`runner`] - Header passthrough, ordering and the drop-and-warn policy
//! - [`stats`] - Row counters for the run
//!
//! ## Usage
//!
//! ```rust
//! use csv_normalizer::pipeline::RowPipeline;
//!
//! let input = "Timestamp,Address,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes\n\
//!              4/1/11 11:00:00 AM,123 Main St,94121,Monkey Alberto,1:23:32.123,1:32:33.123,zzsasdfa,notes\n";
//!
//! let mut output = Vec::new();
//! let mut warnings = Vec::new();
//! let stats = RowPipeline::default()
//!     .run(input.as_bytes(), &mut output, &mut warnings)
//!     .unwrap();
//!
//! assert_eq!(stats.rows_written, 1);
//! assert!(warnings.is_empty());
//! ```

pub mod record;
pub mod runner;
pub mod sink;
pub mod source;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use record::RecordNormalizer;
pub use runner::RowPipeline;
pub use sink::RecordSink;
pub use source::{InputSpec, RecordSource};
pub use stats::RunStats;
