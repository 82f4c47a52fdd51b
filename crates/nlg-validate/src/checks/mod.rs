//! Validation check modules.
//!
//! Checks run per row, in a fixed order: cell types, completeness, width,
//! duplicates. The order decides the order of warning lines within a row.

pub mod dates;
pub mod values;

use std::collections::HashSet;

use nlg_model::{ColumnMapping, RawTable, is_missing};

use crate::issue::Issue;

/// What the checks found in one row.
#[derive(Debug, Default)]
pub struct RowFindings {
    pub issues: Vec<Issue>,
    pub missing_values: usize,
    pub duplicate: bool,
}

impl RowFindings {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Remembers rows already seen so repeats can be flagged.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen: HashSet<String>,
}

impl DuplicateTracker {
    /// Records the row and returns true if an identical row came before.
    pub fn observe(&mut self, cells: &[String]) -> bool {
        !self.seen.insert(cells.join("|"))
    }
}

/// Runs every check on the row at `row_index`.
pub fn check_row(
    table: &RawTable,
    mapping: &ColumnMapping,
    row_index: usize,
    duplicates: &mut DuplicateTracker,
) -> RowFindings {
    let row = row_index + 1;
    let cells: &[String] = table
        .rows
        .get(row_index)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let mut findings = RowFindings::default();

    // 1. Cell types
    for (column, header) in table.headers.iter().enumerate() {
        let value = table.cell(row_index, column);
        if is_missing(value) {
            findings.missing_values += 1;
            continue;
        }
        let Some(descriptor) = mapping.descriptor_at(column) else {
            continue;
        };
        if !values::is_valid_value(descriptor.semantic_type, value) {
            findings.issues.push(Issue::InvalidValue {
                row,
                header: header.clone(),
                value: value.to_string(),
                semantic_type: descriptor.semantic_type,
            });
        }
    }

    // 2. Completeness
    if findings.missing_values * 2 > table.column_count() {
        findings.issues.push(Issue::MostlyMissing { row });
    }

    // 3. Width
    let extra = cells.len().saturating_sub(table.column_count());
    if extra > 0 {
        findings.issues.push(Issue::ExtraValues { row, count: extra });
    }

    // 4. Duplicates
    if duplicates.observe(cells) {
        findings.duplicate = true;
        findings.issues.push(Issue::DuplicateRow { row });
    }

    findings
}

#[cfg(test)]
mod tests {
    use nlg_map::auto_map_columns;

    use super::*;

    #[test]
    fn row_issue_order() {
        let table = RawTable::from_rows(
            ["Units", "Region", "Category"],
            [vec!["x", "", "", "extra"], vec!["x", "", "", "extra"]],
        );
        let mapping = auto_map_columns(&table);
        let mut tracker = DuplicateTracker::default();
        let first = check_row(&table, &mapping, 0, &mut tracker);
        assert_eq!(first.missing_values, 2);
        assert!(!first.duplicate);
        let kinds: Vec<&str> = first.issues.iter().map(Issue::kind).collect();
        assert_eq!(kinds, vec!["mostly_missing", "extra_values"]);

        let second = check_row(&table, &mapping, 1, &mut tracker);
        assert!(second.duplicate);
        assert_eq!(second.issues.last(), Some(&Issue::DuplicateRow { row: 2 }));
    }

    #[test]
    fn exactly_half_missing_is_fine() {
        let table = RawTable::from_rows(["A", "B"], [["1", ""]]);
        let mapping = auto_map_columns(&table);
        let findings = check_row(&table, &mapping, 0, &mut DuplicateTracker::default());
        assert_eq!(findings.missing_values, 1);
        assert!(findings.is_valid());
    }
}
