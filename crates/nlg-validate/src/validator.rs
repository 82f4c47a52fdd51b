use tracing::{debug, trace};

use nlg_model::{ColumnMapping, RawTable, ValidationMetrics, ValidationReport, is_missing};

use crate::checks::{DuplicateTracker, check_row};
use crate::issue::Issue;

/// Warnings kept in a report; the rest are only counted.
pub const MAX_REPORTED_WARNINGS: usize = 10;

/// Every issue found in a table plus the untruncated metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assessment {
    pub issues: Vec<Issue>,
    pub metrics: ValidationMetrics,
}

/// Runs all row checks over `table` under `mapping`.
pub fn assess(table: &RawTable, mapping: &ColumnMapping) -> Assessment {
    let mut duplicates = DuplicateTracker::default();
    let mut assessment = Assessment {
        issues: Vec::new(),
        metrics: ValidationMetrics {
            total_rows: table.row_count(),
            ..ValidationMetrics::default()
        },
    };

    for row_index in 0..table.row_count() {
        let findings = check_row(table, mapping, row_index, &mut duplicates);
        let metrics = &mut assessment.metrics;
        metrics.missing_values += findings.missing_values;
        if findings.duplicate {
            metrics.duplicates += 1;
        }
        if findings.is_valid() {
            metrics.valid_rows += 1;
        }
        for issue in &findings.issues {
            trace!(row = issue.row(), kind = issue.kind(), "row issue");
        }
        assessment.issues.extend(findings.issues);
    }

    assessment
}

/// Remediation hints derived from aggregate metrics.
pub fn suggestions(metrics: &ValidationMetrics) -> Vec<String> {
    let mut suggestions = Vec::new();
    if metrics.missing_values > 0 {
        suggestions.push(format!(
            "Consider filling {} missing values or removing incomplete rows",
            metrics.missing_values
        ));
    }
    // valid_rows < 0.8 * total_rows, kept in integers.
    if metrics.valid_rows * 5 < metrics.total_rows * 4 {
        suggestions.push(
            "Consider reviewing data quality - less than 80% of rows are valid".to_string(),
        );
    }
    suggestions
}

/// Builds the data-quality report for `table` under `mapping`.
///
/// Never fails on malformed data: every problem becomes a warning line and
/// a metric. Calling it twice on the same inputs gives the same report.
pub fn validate(table: &RawTable, mapping: &ColumnMapping) -> ValidationReport {
    let Assessment { issues, metrics } = assess(table, mapping);
    let total_warnings = issues.len();
    let warnings: Vec<String> = issues
        .iter()
        .take(MAX_REPORTED_WARNINGS)
        .map(ToString::to_string)
        .collect();

    debug!(
        rows = metrics.total_rows,
        valid_rows = metrics.valid_rows,
        missing_values = metrics.missing_values,
        duplicates = metrics.duplicates,
        warnings = total_warnings,
        "validated table"
    );

    ValidationReport {
        is_valid: total_warnings == 0,
        omitted_warnings: total_warnings - warnings.len(),
        warnings,
        suggestions: suggestions(&metrics),
        metrics,
    }
}

/// Copy of `table` keeping only rows where more than half of the header
/// positions are populated.
pub fn clean_table(table: &RawTable) -> RawTable {
    let rows = table
        .rows
        .iter()
        .enumerate()
        .filter(|(row_index, _)| {
            let populated = (0..table.column_count())
                .filter(|&column| !is_missing(table.cell(*row_index, column)))
                .count();
            populated * 2 > table.column_count()
        })
        .map(|(_, cells)| cells.clone())
        .collect();
    RawTable::new(table.headers.clone(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_thresholds() {
        let metrics = ValidationMetrics {
            total_rows: 5,
            valid_rows: 4,
            missing_values: 0,
            duplicates: 0,
        };
        assert!(suggestions(&metrics).is_empty());

        let metrics = ValidationMetrics {
            total_rows: 5,
            valid_rows: 3,
            missing_values: 2,
            duplicates: 0,
        };
        assert_eq!(
            suggestions(&metrics),
            vec![
                "Consider filling 2 missing values or removing incomplete rows".to_string(),
                "Consider reviewing data quality - less than 80% of rows are valid".to_string(),
            ]
        );
    }

    #[test]
    fn empty_table_has_no_suggestions() {
        assert!(suggestions(&ValidationMetrics::default()).is_empty());
    }

    #[test]
    fn clean_table_drops_sparse_rows() {
        let table = RawTable::from_rows(
            ["A", "B", "C"],
            [vec!["1", "2", ""], vec!["1", "", ""], vec!["1"]],
        );
        let cleaned = clean_table(&table);
        assert_eq!(cleaned.row_count(), 1);
        assert_eq!(cleaned.rows[0], vec!["1", "2", ""]);
    }
}
