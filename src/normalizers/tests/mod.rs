//! Tests for the field normalizers that need shared fixtures
//!
//! Zip and free-text normalizers keep their tests inline; timestamp and
//! duration handling have enough cases to warrant their own modules.

use crate::config::TimezoneConfig;
use crate::normalizers::TimestampNormalizer;


/// Pacific to Eastern normalizer used by most timestamp tests
pub fn default_timestamps() -> TimestampNormalizer {
    TimestampNormalizer::new(TimezoneConfig::default())
}
