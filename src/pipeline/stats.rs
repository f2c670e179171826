//! Run statistics for the normalization pipeline
//!
//! Counts only; individual failures are reported on the diagnostics channel
//! as they happen and are not retained.

/// Row counters for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Data rows read, header excluded
    pub rows_read: usize,

    /// Rows normalized and written to the output
    pub rows_written: usize,

    /// Rows dropped because a field failed validation
    pub rows_dropped: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            100.0
        } else {
            (self.rows_written as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if the run was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalized {} of {} rows ({:.1}% success), dropped {}",
            self.rows_written,
            self.rows_read,
            self.success_rate(),
            self.rows_dropped
        )
    }
}
