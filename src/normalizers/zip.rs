//! Zip code validation and zero padding

use crate::constants::{ZIP_PAD_CHAR, ZIP_WIDTH};
use crate::error::FieldError;
use regex::Regex;
use std::sync::LazyLock;

/// Integer grammar accepted for zip codes: optional surrounding whitespace
/// and a single leading sign around ASCII digits
static ZIP_INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]?[0-9]+\s*$").expect("Invalid zip integer regex"));

/// Validate that the value is an integer, then left-pad to five characters.
///
/// Values already five characters or longer are returned unchanged. Padding
/// is applied to the original text, so accepted whitespace or signs are kept
/// and count towards the width.
pub fn normalize_zip(value: &str) -> Result<String, FieldError> {
    if !ZIP_INTEGER_REGEX.is_match(value) {
        return Err(FieldError::invalid_zip(value));
    }

    let width = value.chars().count();
    if width >= ZIP_WIDTH {
        return Ok(value.to_string());
    }

    let mut padded: String = std::iter::repeat_n(ZIP_PAD_CHAR, ZIP_WIDTH - width).collect();
    padded.push_str(value);
    Ok(padded)
}
