//! Validation issue types.
//!
//! Each variant carries only the data its warning line needs. Row numbers
//! are one-based positions among the data rows (the header row excluded).

use std::fmt;

use serde::{Deserialize, Serialize};

use nlg_model::SemanticType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A populated cell does not parse as its column's semantic type.
    InvalidValue {
        row: usize,
        header: String,
        value: String,
        semantic_type: SemanticType,
    },
    /// More than half of the row's cells are missing.
    MostlyMissing { row: usize },
    /// The row has cells past the last header.
    ExtraValues { row: usize, count: usize },
    /// Same cells as an earlier row.
    DuplicateRow { row: usize },
}

impl Issue {
    pub fn row(&self) -> usize {
        match self {
            Issue::InvalidValue { row, .. }
            | Issue::MostlyMissing { row }
            | Issue::ExtraValues { row, .. }
            | Issue::DuplicateRow { row } => *row,
        }
    }

    /// Short identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::InvalidValue { .. } => "invalid_value",
            Issue::MostlyMissing { .. } => "mostly_missing",
            Issue::ExtraValues { .. } => "extra_values",
            Issue::DuplicateRow { .. } => "duplicate_row",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::InvalidValue {
                row,
                header,
                value,
                semantic_type,
            } => write!(
                f,
                "Row {row}, {header}: \"{value}\" is not a valid {semantic_type}"
            ),
            Issue::MostlyMissing { row } => {
                write!(f, "Row {row}: More than 50% of values are missing")
            }
            Issue::ExtraValues { row, count } => write!(
                f,
                "Row {row}: {count} values beyond the last header were ignored"
            ),
            Issue::DuplicateRow { row } => write!(f, "Row {row}: Duplicate row detected"),
        }
    }
}
