//! Configuration for the normalization pipeline.
//!
//! The only tunable state is the pair of fixed UTC offsets used by the
//! timestamp normalizer. Both offsets are immutable once constructed and
//! carry no daylight-saving rules.

use crate::constants::{SECONDS_PER_HOUR, SOURCE_OFFSET_HOURS, TARGET_OFFSET_HOURS};
use crate::error::{NormalizerError, Result};
use chrono::{FixedOffset, Offset, Utc};
use tracing::debug;

/// Source and target offsets for timestamp conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneConfig {
    /// Offset the naive input timestamps are interpreted in
    pub source: FixedOffset,
    /// Offset output timestamps are expressed in
    pub target: FixedOffset,
}

impl TimezoneConfig {
    /// Build a config from whole-hour offsets east of UTC
    pub fn new(source_hours: i32, target_hours: i32) -> Result<Self> {
        let source = offset_from_hours(source_hours)?;
        let target = offset_from_hours(target_hours)?;

        debug!("Timezone config: source={} target={}", source, target);

        Ok(Self { source, target })
    }

    /// Shift applied to every timestamp, in seconds
    pub fn shift_seconds(&self) -> i32 {
        self.target.local_minus_utc() - self.source.local_minus_utc()
    }
}

impl Default for TimezoneConfig {
    /// Pacific (-08:00) to Eastern (-05:00)
    fn default() -> Self {
        // Both constants are within a day, so the UTC fallback is unreachable
        let utc = Utc.fix();
        Self {
            source: FixedOffset::east_opt(SOURCE_OFFSET_HOURS * SECONDS_PER_HOUR).unwrap_or(utc),
            target: FixedOffset::east_opt(TARGET_OFFSET_HOURS * SECONDS_PER_HOUR).unwrap_or(utc),
        }
    }
}

fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            NormalizerError::configuration(format!(
                "UTC offset of {} hours is out of range (must be between -23 and 23)",
                hours
            ))
        })
}
