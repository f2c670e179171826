//! Field normalizers for the fixed record layout
//!
//! Each normalizer takes one raw field value and either returns its
//! canonical text or a [`FieldError`](crate::error::FieldError). None of them
//! has side effects, so they can be tested and benchmarked in isolation.
//!
//! ## Architecture
//!
//! - [`timestamp`] - Fixed-offset timezone conversion to RFC 3339
//! - [`zip`] - Integer validation and zero padding
//! - [`duration`] - `H:MM:SS.mmm` parsing, totals and float formatting
//! - [`text`] - Address quoting, name casing and notes passthrough
//!
//! ## Usage
//!
//! ```rust
//! use csv_normalizer::normalizers::{normalize_zip, TimestampNormalizer};
//!
//! let timestamps = TimestampNormalizer::default();
//! assert_eq!(
//!     timestamps.normalize("4/1/11 11:00:00 AM").unwrap(),
//!     "2011-04-01T14:00:00-05:00"
//! );
//! assert_eq!(normalize_zip("123").unwrap(), "00123");
//! ```

pub mod duration;
pub mod text;
pub mod timestamp;
pub mod zip;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use duration::{format_seconds, normalize_duration, parse_duration, total_duration};
pub use text::{normalize_address, normalize_full_name, normalize_notes};
pub use timestamp::TimestampNormalizer;
pub use zip::normalize_zip;
