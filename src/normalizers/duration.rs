//! Duration parsing and floating-point second formatting
//!
//! Durations arrive as `H:MM:SS.mmm` and leave as a total number of seconds.
//! Seconds are never rounded: the output is the shortest decimal text that
//! reads back as the same `f64`.

use crate::constants::DURATION_PARTS;
use crate::error::FieldError;

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Magnitudes outside `[SCIENTIFIC_LOWER, SCIENTIFIC_UPPER)` use exponent notation
const SCIENTIFIC_LOWER: f64 = 1e-4;
const SCIENTIFIC_UPPER: f64 = 1e16;

/// Parse `H:MM:SS[.fff]` into a total number of seconds
pub fn parse_duration(value: &str) -> Result<f64, FieldError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != DURATION_PARTS {
        return Err(FieldError::invalid_duration(
            value,
            format!(
                "expected {} ':'-separated parts, found {}",
                DURATION_PARTS,
                parts.len()
            ),
        ));
    }

    let hours = parse_whole(value, "hours", parts[0])?;
    let minutes = parse_whole(value, "minutes", parts[1])?;
    let seconds: f64 = parts[2].trim().parse().map_err(|_| {
        FieldError::invalid_duration(value, format!("seconds '{}' is not a number", parts[2]))
    })?;

    let whole_seconds = hours
        .checked_mul(SECONDS_PER_HOUR)
        .zip(minutes.checked_mul(SECONDS_PER_MINUTE))
        .and_then(|(h, m)| h.checked_add(m))
        .ok_or_else(|| FieldError::invalid_duration(value, "hours and minutes overflow"))?;

    Ok(whole_seconds as f64 + seconds)
}

fn parse_whole(value: &str, component: &str, part: &str) -> Result<i64, FieldError> {
    part.trim().parse::<i64>().map_err(|_| {
        FieldError::invalid_duration(
            value,
            format!("{} '{}' is not an integer", component, part),
        )
    })
}

/// Normalize a single duration column to its seconds representation
pub fn normalize_duration(value: &str) -> Result<String, FieldError> {
    parse_duration(value).map(format_seconds)
}

/// Recompute the total column from the two parsed durations
pub fn total_duration(foo_seconds: f64, bar_seconds: f64) -> String {
    format_seconds(foo_seconds + bar_seconds)
}

/// Render seconds as the shortest round-trip decimal.
///
/// Integral values keep a trailing `.0`. Very large or very small
/// magnitudes switch to `1.5e+16` style exponent notation.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.is_nan() {
        return "nan".to_string();
    }
    if seconds.is_infinite() {
        return if seconds > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = seconds.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return format_scientific(seconds);
    }

    let text = seconds.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn format_scientific(seconds: f64) -> String {
    let text = format!("{:e}", seconds);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => text,
    }
}
