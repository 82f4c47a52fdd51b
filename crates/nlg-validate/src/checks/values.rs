//! Per-cell type checks.

use std::sync::LazyLock;

use regex::Regex;

use nlg_model::SemanticType;

use super::dates::is_valid_date;

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[0-9]*%?$").expect("valid percentage regex"));

static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\$?|\$?-)[0-9]+\.?[0-9]*$").expect("valid currency regex")
});

/// `,` separators removed, the rest is a finite float.
pub fn is_valid_number(value: &str) -> bool {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
}

/// Unsigned decimal with an optional trailing `%`.
pub fn is_valid_percentage(value: &str) -> bool {
    PERCENTAGE.is_match(value.trim())
}

/// Decimal with an optional `$`; the minus sign may sit on either side of it.
pub fn is_valid_currency(value: &str) -> bool {
    CURRENCY.is_match(&value.trim().replace(',', ""))
}

/// Checks a populated cell against its column type. `Text` accepts anything.
pub fn is_valid_value(semantic_type: SemanticType, value: &str) -> bool {
    match semantic_type {
        SemanticType::Text => true,
        SemanticType::Number => is_valid_number(value),
        SemanticType::Date => is_valid_date(value),
        SemanticType::Percentage => is_valid_percentage(value),
        SemanticType::Currency => is_valid_currency(value),
    }
}
