//! Application constants for the CSV normalizer
//!
//! Fixed record layout, timezone offsets and diagnostic text used
//! throughout the normalization pipeline.

// =============================================================================
// Record Layout
// =============================================================================

/// Number of positional fields in every record
pub const RECORD_WIDTH: usize = 8;

/// Column names in positional order, used for diagnostics only
pub const FIELD_NAMES: [&str; RECORD_WIDTH] = [
    "Timestamp",
    "Address",
    "ZIP",
    "FullName",
    "FooDuration",
    "BarDuration",
    "TotalDuration",
    "Notes",
];

/// Field delimiter for both input and output
pub const DELIMITER: u8 = b',';

// =============================================================================
// Timezones
// =============================================================================

/// Source offset for input timestamps (US/Pacific, DST ignored)
pub const SOURCE_OFFSET_HOURS: i32 = -8;

/// Target offset for output timestamps (US/Eastern, DST ignored)
pub const TARGET_OFFSET_HOURS: i32 = -5;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: i32 = 3600;

/// Accepted input timestamp layout. `%m`, `%d` and `%I` accept one or two
/// digits, which covers both `M/D/YY` and `MM/DD/YY`.
pub const TIMESTAMP_INPUT_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";

// =============================================================================
// Field Rules
// =============================================================================

/// Zip codes shorter than this are left-padded with `ZIP_PAD_CHAR`
pub const ZIP_WIDTH: usize = 5;

pub const ZIP_PAD_CHAR: char = '0';

/// Number of `:`-separated components in a duration
pub const DURATION_PARTS: usize = 3;

// =============================================================================
// Diagnostics
// =============================================================================

/// Prefix for the line written when a row is dropped
pub const OMITTED_ROW_PREFIX: &str = "WARN: row will be omitted due to invalid input format: ";

/// Path argument meaning standard input
pub const STDIN_PATH: &str = "-";

/// Logging target filter used when RUST_LOG is not set
pub const LOG_TARGET: &str = "csv_normalizer";
