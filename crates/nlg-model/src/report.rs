use serde::{Deserialize, Serialize};

/// Row and cell counts gathered over the whole file.
///
/// These are never truncated, unlike the warning list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub missing_values: usize,
    pub duplicates: usize,
}

impl ValidationMetrics {
    pub fn invalid_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.valid_rows)
    }

    /// Share of valid rows, `1.0` for an empty file.
    pub fn valid_ratio(&self) -> f64 {
        if self.total_rows == 0 {
            1.0
        } else {
            self.valid_rows as f64 / self.total_rows as f64
        }
    }
}

/// Data-quality report for one file under one mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff the validator produced no warning at all.
    pub is_valid: bool,
    /// The first warnings in row order.
    pub warnings: Vec<String>,
    /// Warnings dropped from `warnings` by the display cap.
    #[serde(default)]
    pub omitted_warnings: usize,
    pub suggestions: Vec<String>,
    pub metrics: ValidationMetrics,
}

impl ValidationReport {
    /// Total warnings produced, including the ones cut by the display cap.
    pub fn warning_total(&self) -> usize {
        self.warnings.len() + self.omitted_warnings
    }
}
