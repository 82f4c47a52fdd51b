//! Semantic type detection over sampled column values.
//!
//! Detection walks [`DETECTION_RULES`] top to bottom and returns the type of
//! the first rule every sampled value satisfies. Stricter types come first so
//! dates and money are not swallowed by the plain number rule.

use std::sync::LazyLock;

use regex::Regex;

use nlg_model::{RawTable, SemanticType, is_missing};

/// Number of populated values inspected per column.
pub const SAMPLE_SIZE: usize = 10;

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"));

static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?[0-9]+\.?[0-9]*$").expect("valid currency regex"));

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[0-9]*%$").expect("valid percentage regex"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("valid number regex"));

/// One entry of the detection table.
#[derive(Clone, Copy)]
pub struct DetectionRule {
    pub semantic_type: SemanticType,
    pub matches: fn(&[&str]) -> bool,
}

/// Detection priority, highest first. `Text` is the implicit fallback.
pub const DETECTION_RULES: &[DetectionRule] = &[
    DetectionRule {
        semantic_type: SemanticType::Date,
        matches: is_date_sample,
    },
    DetectionRule {
        semantic_type: SemanticType::Currency,
        matches: is_currency_sample,
    },
    DetectionRule {
        semantic_type: SemanticType::Percentage,
        matches: is_percentage_sample,
    },
    DetectionRule {
        semantic_type: SemanticType::Number,
        matches: is_number_sample,
    },
];

/// Every value starts with `YYYY-MM-DD`.
pub fn is_date_sample(values: &[&str]) -> bool {
    values.iter().all(|value| DATE_PREFIX.is_match(value))
}

/// Every value is an optional `$` plus a decimal once `,` separators are
/// removed, and at least one value carries a `$` or a `,`.
///
/// Without the marker requirement a column of bare integers would be money.
pub fn is_currency_sample(values: &[&str]) -> bool {
    values
        .iter()
        .all(|value| CURRENCY.is_match(&value.replace(',', "")))
        && values
            .iter()
            .any(|value| value.contains('$') || value.contains(','))
}

pub fn is_percentage_sample(values: &[&str]) -> bool {
    values.iter().all(|value| PERCENTAGE.is_match(value))
}

pub fn is_number_sample(values: &[&str]) -> bool {
    values.iter().all(|value| NUMBER.is_match(value))
}

/// Infers the semantic type of a column from its sampled values.
///
/// An empty sample is `Text`. A single value that fails a rule demotes the
/// whole column past that rule.
pub fn detect_column_type<S: AsRef<str>>(samples: &[S]) -> SemanticType {
    let values: Vec<&str> = samples.iter().map(AsRef::as_ref).collect();
    if values.is_empty() {
        return SemanticType::Text;
    }
    DETECTION_RULES
        .iter()
        .find(|rule| (rule.matches)(&values))
        .map_or(SemanticType::Text, |rule| rule.semantic_type)
}

/// The first [`SAMPLE_SIZE`] populated, trimmed values of a column.
pub fn sample_column(table: &RawTable, column: usize) -> Vec<&str> {
    table
        .column_values(column)
        .filter(|value| !is_missing(value))
        .map(str::trim)
        .take(SAMPLE_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_date_currency_percentage_number() {
        let order: Vec<SemanticType> = DETECTION_RULES.iter().map(|r| r.semantic_type).collect();
        assert_eq!(
            order,
            vec![
                SemanticType::Date,
                SemanticType::Currency,
                SemanticType::Percentage,
                SemanticType::Number
            ]
        );
    }

    #[test]
    fn detects_each_type() {
        assert_eq!(
            detect_column_type(&["2024-01-01", "2024-02-01T10:00"]),
            SemanticType::Date
        );
        assert_eq!(detect_column_type(&["$1,000", "250.50"]), SemanticType::Currency);
        assert_eq!(detect_column_type(&["1,200", "800"]), SemanticType::Currency);
        assert_eq!(detect_column_type(&["15%", "2.5%"]), SemanticType::Percentage);
        assert_eq!(detect_column_type(&["1200", "4.5", "7."]), SemanticType::Number);
        assert_eq!(detect_column_type(&["Product A", "12"]), SemanticType::Text);
    }

    #[test]
    fn one_counterexample_demotes_to_text() {
        assert_eq!(
            detect_column_type(&["2024-01-01", "not-a-date"]),
            SemanticType::Text
        );
        assert_eq!(detect_column_type(&["$1,000", "oops"]), SemanticType::Text);
    }

    #[test]
    fn percentage_column_with_bare_number_is_text() {
        assert_eq!(detect_column_type(&["15%", "22"]), SemanticType::Text);
    }

    #[test]
    fn empty_sample_is_text() {
        let empty: [&str; 0] = [];
        assert_eq!(detect_column_type(&empty), SemanticType::Text);
    }

    #[test]
    fn negative_and_non_ascii_digits_are_text() {
        assert_eq!(detect_column_type(&["-5", "3"]), SemanticType::Text);
        assert_eq!(detect_column_type(&["١٢٣"]), SemanticType::Text);
    }

    #[test]
    fn sample_skips_blanks_trims_and_caps() {
        let mut rows = vec![vec![" ".to_string()], vec![String::new()]];
        rows.extend((0..15).map(|n| vec![format!(" {n} ")]));
        let table = RawTable::new(vec!["N".to_string()], rows);
        let sample = sample_column(&table, 0);
        assert_eq!(sample.len(), SAMPLE_SIZE);
        assert_eq!(sample[0], "0");
        assert_eq!(sample[9], "9");
    }
}
