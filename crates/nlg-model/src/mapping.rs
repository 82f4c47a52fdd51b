//! Column-to-schema bindings produced by the mapping pass.

use serde::{Deserialize, Serialize};

use crate::semantic::SemanticType;

/// Canonical description of one source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Canonical identifier used to merge columns across files.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    pub semantic_type: SemanticType,
    /// Optional hint such as an expected date pattern or currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            semantic_type,
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, semantic_type: SemanticType) -> Self {
        self.semantic_type = semantic_type;
        self
    }
}

/// Where a column binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingOrigin {
    /// Header matched an entry of the canonical dictionary.
    Canonical,
    /// No dictionary match; key derived from the header text.
    Derived,
    /// Set explicitly by the user.
    UserOverride,
}

/// One header bound to its descriptor, by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedColumn {
    /// Header text exactly as it appears in the file.
    pub header: String,
    /// Zero-based position of the column in the file.
    pub index: usize,
    pub descriptor: ColumnDescriptor,
    pub origin: MappingOrigin,
}

/// Mapping for one file: one entry per header, in header order.
///
/// Entries are bound by column position rather than header text, so two
/// columns sharing a header never overwrite each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: Vec<MappedColumn>,
}

impl ColumnMapping {
    pub fn new(columns: Vec<MappedColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[MappedColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Entry for the column at `index`.
    pub fn get(&self, index: usize) -> Option<&MappedColumn> {
        self.columns.iter().find(|column| column.index == index)
    }

    pub fn descriptor_at(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.get(index).map(|column| &column.descriptor)
    }

    /// First entry whose header equals `header`.
    pub fn by_header(&self, header: &str) -> Option<&MappedColumn> {
        self.columns.iter().find(|column| column.header == header)
    }

    /// First entry bound to canonical key `key`.
    pub fn by_key(&self, key: &str) -> Option<&MappedColumn> {
        self.columns.iter().find(|column| column.descriptor.key == key)
    }

    /// Number of columns that matched the canonical dictionary.
    pub fn matched_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|column| column.origin == MappingOrigin::Canonical)
            .count()
    }

    /// Returns a copy with the entry at `index` replaced, or `None` if no
    /// column sits at that position.
    #[must_use]
    pub fn with_descriptor(&self, index: usize, descriptor: ColumnDescriptor) -> Option<Self> {
        let position = self.columns.iter().position(|column| column.index == index)?;
        let mut columns = self.columns.clone();
        let entry = &mut columns[position];
        entry.descriptor = descriptor;
        entry.origin = MappingOrigin::UserOverride;
        Some(Self { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColumnMapping {
        ColumnMapping::new(vec![
            MappedColumn {
                header: "Revenue".to_string(),
                index: 0,
                descriptor: ColumnDescriptor::new("revenue", "Revenue", SemanticType::Currency)
                    .with_format("USD"),
                origin: MappingOrigin::Canonical,
            },
            MappedColumn {
                header: "Notes".to_string(),
                index: 1,
                descriptor: ColumnDescriptor::new("notes", "Notes", SemanticType::Text),
                origin: MappingOrigin::Derived,
            },
        ])
    }

    #[test]
    fn override_leaves_original_untouched() {
        let mapping = sample();
        let updated = mapping
            .with_descriptor(1, ColumnDescriptor::new("notes", "Notes", SemanticType::Number))
            .expect("column 1 exists");

        assert_eq!(mapping.columns()[1].descriptor.semantic_type, SemanticType::Text);
        assert_eq!(updated.columns()[1].descriptor.semantic_type, SemanticType::Number);
        assert_eq!(updated.columns()[1].origin, MappingOrigin::UserOverride);
        assert_eq!(updated.matched_count(), 1);
    }

    #[test]
    fn override_out_of_range_is_none() {
        assert!(
            sample()
                .with_descriptor(7, ColumnDescriptor::new("x", "X", SemanticType::Text))
                .is_none()
        );
    }

    #[test]
    fn lookups() {
        let mapping = sample();
        assert_eq!(mapping.by_header("Notes").map(|c| c.index), Some(1));
        assert_eq!(mapping.by_key("revenue").map(|c| c.index), Some(0));
        assert_eq!(
            mapping.descriptor_at(0).and_then(|d| d.format.as_deref()),
            Some("USD")
        );
    }
}
