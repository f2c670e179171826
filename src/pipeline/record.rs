//! Per-record normalization
//!
//! Applies every field normalizer in column order. The first failing field
//! aborts the record, so a [`NormalizedRecord`] only exists when all
//! validated fields parsed.

use crate::config::TimezoneConfig;
use crate::error::FieldError;
use crate::models::{Field, NormalizedRecord, Record};
use crate::normalizers::{
    TimestampNormalizer, format_seconds, normalize_address, normalize_full_name, normalize_notes,
    normalize_zip, parse_duration, total_duration,
};

/// Normalizes whole records using a fixed timezone configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer {
    timestamps: TimestampNormalizer,
}

impl RecordNormalizer {
    pub fn new(config: TimezoneConfig) -> Self {
        Self {
            timestamps: TimestampNormalizer::new(config),
        }
    }

    /// Normalize one record, stopping at the first invalid field
    pub fn normalize(&self, record: &Record) -> Result<NormalizedRecord, FieldError> {
        let timestamp = self.timestamps.normalize(record.get(Field::Timestamp)?)?;
        let address = normalize_address(record.get(Field::Address)?);
        let zip = normalize_zip(record.get(Field::Zip)?)?;
        let full_name = normalize_full_name(record.get(Field::FullName)?);
        let foo_seconds = parse_duration(record.get(Field::FooDuration)?)?;
        let bar_seconds = parse_duration(record.get(Field::BarDuration)?)?;

        // The input total is garbage and never read, but the column must exist
        record.get(Field::TotalDuration)?;
        let notes = normalize_notes(record.get(Field::Notes)?);

        Ok(NormalizedRecord {
            timestamp,
            address,
            zip,
            full_name,
            foo_duration: format_seconds(foo_seconds),
            bar_duration: format_seconds(bar_seconds),
            total_duration: total_duration(foo_seconds, bar_seconds),
            notes,
        })
    }
}
