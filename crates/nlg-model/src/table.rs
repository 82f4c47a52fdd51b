//! Raw tabular input handed over by a delimited-file parser.

use serde::{Deserialize, Serialize};

/// A parsed table of raw cell strings.
///
/// Rows are positionally aligned to `headers`. A row shorter than the header
/// list is read as if its trailing cells were empty; a row longer than the
/// header list keeps its extra cells so the validator can flag them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from string literals, mostly for tests and demos.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, column)`; missing trailing cells read as `""`.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// All values of one column in row order, padded with `""` for short rows.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |cells| cells.get(column).map_or("", String::as_str))
    }
}

/// True if a cell is empty or whitespace-only.
pub fn is_missing(cell: &str) -> bool {
    cell.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_read_as_missing() {
        let table = RawTable::from_rows(["A", "B", "C"], [vec!["1"], vec!["2", "x", "y"]]);
        assert_eq!(table.cell(0, 2), "");
        assert_eq!(table.cell(5, 0), "");
        let col: Vec<&str> = table.column_values(1).collect();
        assert_eq!(col, vec!["", "x"]);
    }

    #[test]
    fn whitespace_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("  \t"));
        assert!(!is_missing(" 0 "));
    }
}
