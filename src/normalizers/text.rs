//! Free-text fields that never fail validation

/// Wrap addresses containing a comma in double quotes.
///
/// This is a heuristic, not CSV escaping: embedded quotes are left alone and
/// an already-quoted address containing a comma is wrapped again.
pub fn normalize_address(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Uppercase using full Unicode case mapping
pub fn normalize_full_name(value: &str) -> String {
    value.to_uppercase()
}

/// Notes are passed through untouched
pub fn normalize_notes(value: &str) -> String {
    value.to_string()
}
