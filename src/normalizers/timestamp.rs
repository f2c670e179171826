//! Timestamp normalization between fixed UTC offsets

use crate::config::TimezoneConfig;
use crate::constants::TIMESTAMP_INPUT_FORMAT;
use crate::error::FieldError;
use chrono::{Datelike, NaiveDateTime, SecondsFormat, Timelike};

/// `%y` maps 00-69 to 20xx; 69 belongs to the 1900s on POSIX
const PIVOT_YEAR: i32 = 2069;

/// Converts 12-hour `M/D/YY HH:MM:SS AM/PM` timestamps from the source
/// offset to RFC 3339 at the target offset
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampNormalizer {
    config: TimezoneConfig,
}

impl TimestampNormalizer {
    pub fn new(config: TimezoneConfig) -> Self {
        Self { config }
    }

    /// Parse, shift to the target offset and render as RFC 3339
    pub fn normalize(&self, value: &str) -> Result<String, FieldError> {
        if value.starts_with(char::is_whitespace) {
            return Err(rejected(value, "leading whitespace"));
        }

        let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_INPUT_FORMAT)
            .map_err(|e| FieldError::invalid_timestamp(value, e))?;

        // chrono encodes a parsed second of 60 as a leap second
        if naive.nanosecond() >= 1_000_000_000 {
            return Err(rejected(value, "second must be in 0..59"));
        }

        let naive = if naive.year() == PIVOT_YEAR {
            naive
                .with_year(PIVOT_YEAR - 100)
                .ok_or_else(|| rejected(value, "date out of range"))?
        } else {
            naive
        };

        // Fixed offsets have exactly one mapping unless the instant overflows
        let local = naive
            .and_local_timezone(self.config.source)
            .single()
            .ok_or_else(|| rejected(value, "date out of range"))?;

        Ok(local
            .with_timezone(&self.config.target)
            .to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

fn rejected(value: &str, reason: &str) -> FieldError {
    FieldError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
