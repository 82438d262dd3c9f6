//! Size and reduction reporting for a minification run.

use humansize::{format_size, DECIMAL};
use serde::Serialize;

/// Errors from [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// The reduction of an empty original is undefined. Callers filter out
    /// empty files before they get this far.
    #[error("Cannot compute a reduction for empty input")]
    InvalidDivision,
}

/// Outcome of minifying one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinificationResult {
    pub minified: String,
    pub original_size_bytes: usize,
    pub minified_size_bytes: usize,
    /// Whole percent, rounded half up. Always 0 when `already_minified`.
    pub reduction_percent: i64,
    /// The pipeline returned its input unchanged.
    pub already_minified: bool,
}

impl MinificationResult {
    /// Bytes removed, or 0 if the output somehow grew.
    pub fn bytes_saved(&self) -> usize {
        self.original_size_bytes
            .saturating_sub(self.minified_size_bytes)
    }

    /// Multi-line text for terminal display.
    pub fn summary(&self) -> String {
        if self.already_minified {
            return "File is already minified".to_string();
        }
        format!(
            "Original size: {} bytes\nMinified size: {} bytes\nReduction: {}%",
            self.original_size_bytes, self.minified_size_bytes, self.reduction_percent
        )
    }

    /// One-line variant of [`summary`](Self::summary).
    pub fn short_summary(&self) -> String {
        if self.already_minified {
            return "already minified".to_string();
        }
        format!(
            "{} -> {} bytes (-{}%, {} saved)",
            self.original_size_bytes,
            self.minified_size_bytes,
            self.reduction_percent,
            format_size(self.bytes_saved() as u64, DECIMAL)
        )
    }
}

/// Compare `original` with what the pipeline produced from it.
///
/// # Errors
/// [`ReportError::InvalidDivision`] when `original` is empty.
pub fn classify(original: &str, minified: &str) -> Result<MinificationResult, ReportError> {
    if original.is_empty() {
        return Err(ReportError::InvalidDivision);
    }

    let already_minified = minified == original;
    let original_size_bytes = original.len();
    let minified_size_bytes = minified.len();

    let reduction_percent = if already_minified {
        0
    } else {
        round_half_up((1.0 - minified_size_bytes as f64 / original_size_bytes as f64) * 100.0)
    };

    Ok(MinificationResult {
        minified: minified.to_string(),
        original_size_bytes,
        minified_size_bytes,
        reduction_percent,
        already_minified,
    })
}

/// `x.5` goes up, also for negative values (`-2.5` gives `-2`).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
