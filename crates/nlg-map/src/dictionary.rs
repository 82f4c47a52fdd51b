//! Canonical business fields recognised in uploaded headers.

use nlg_model::{ColumnDescriptor, SemanticType};

/// A known field. `semantic_type` is only a default; the detected type of
/// the actual column always replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalField {
    pub key: &'static str,
    pub label: &'static str,
    pub semantic_type: SemanticType,
    pub format: Option<&'static str>,
}

impl CanonicalField {
    const fn new(key: &'static str, label: &'static str, semantic_type: SemanticType) -> Self {
        Self {
            key,
            label,
            semantic_type,
            format: None,
        }
    }

    const fn with_format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    pub fn descriptor(&self) -> ColumnDescriptor {
        ColumnDescriptor {
            key: self.key.to_string(),
            label: self.label.to_string(),
            semantic_type: self.semantic_type,
            format: self.format.map(str::to_string),
        }
    }
}

/// Dictionary in match priority order. A header matching several entries
/// binds to the earliest one.
pub const CANONICAL_FIELDS: &[CanonicalField] = &[
    CanonicalField::new("company", "Company Name", SemanticType::Text),
    CanonicalField::new("date", "Date", SemanticType::Date).with_format("YYYY-MM-DD"),
    CanonicalField::new("revenue", "Revenue", SemanticType::Currency).with_format("USD"),
    CanonicalField::new("growth", "Growth Rate", SemanticType::Percentage),
    CanonicalField::new("customers", "Customer Count", SemanticType::Number),
    CanonicalField::new("satisfaction", "Satisfaction Score", SemanticType::Number),
    CanonicalField::new("units", "Units Sold", SemanticType::Number),
    CanonicalField::new("product", "Product Name", SemanticType::Text),
    CanonicalField::new("region", "Region", SemanticType::Text),
    CanonicalField::new("category", "Category", SemanticType::Text),
];

/// Case-insensitive substring match in both directions: the header contains
/// the canonical key, or the canonical label contains the header.
pub fn match_canonical(header: &str) -> Option<&'static CanonicalField> {
    let header = header.trim().to_lowercase();
    if header.is_empty() {
        return None;
    }
    CANONICAL_FIELDS
        .iter()
        .find(|field| header.contains(field.key) || field.label.to_lowercase().contains(&header))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(header: &str) -> Option<&'static str> {
        match_canonical(header).map(|field| field.key)
    }

    #[test]
    fn header_contains_key() {
        assert_eq!(key("Total Revenue"), Some("revenue"));
        assert_eq!(key("ORDER_DATE"), Some("date"));
        assert_eq!(key("units"), Some("units"));
    }

    #[test]
    fn label_contains_header() {
        assert_eq!(key("Growth"), Some("growth"));
        assert_eq!(key("Customer"), Some("customers"));
        assert_eq!(key("Score"), Some("satisfaction"));
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        // "name" appears in both "Company Name" and "Product Name".
        assert_eq!(key("Name"), Some("company"));
        // Contains both "date" and "revenue".
        assert_eq!(key("Revenue Date"), Some("date"));
    }

    #[test]
    fn no_match_and_blank_headers() {
        assert_eq!(key("Notes"), None);
        assert_eq!(key("   "), None);
    }
}
