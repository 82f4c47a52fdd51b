//! Mapping engine implementation.

use std::collections::BTreeSet;

use tracing::debug;

use nlg_model::{
    ColumnDescriptor, ColumnMapping, MappedColumn, MappingOrigin, RawTable, SemanticType,
};

use crate::detect::{detect_column_type, sample_column};
use crate::dictionary::match_canonical;
use crate::error::{MapError, Result};

/// Derives a key from header text: lowercase, whitespace runs become `_`.
pub fn derive_key(header: &str) -> String {
    header
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Binds every header of `table` to a descriptor.
///
/// The detected type of a column always wins over the dictionary default.
/// Keys repeated within the file get a positional suffix (`revenue_2`).
/// The result depends only on the table contents.
pub fn auto_map_columns(table: &RawTable) -> ColumnMapping {
    let mut emitted: BTreeSet<String> = BTreeSet::new();
    let mut columns = Vec::with_capacity(table.column_count());

    for (index, header) in table.headers.iter().enumerate() {
        let detected = detect_column_type(&sample_column(table, index));

        let (mut descriptor, origin) = match match_canonical(header) {
            Some(field) => (field.descriptor().with_type(detected), MappingOrigin::Canonical),
            None => (
                ColumnDescriptor::new(derive_key(header), header.clone(), detected),
                MappingOrigin::Derived,
            ),
        };

        descriptor.key = unique_key(&emitted, descriptor.key);
        emitted.insert(descriptor.key.clone());

        debug!(
            column = index,
            header = %header,
            key = %descriptor.key,
            semantic_type = %descriptor.semantic_type,
            ?origin,
            "mapped column"
        );

        columns.push(MappedColumn {
            header: header.clone(),
            index,
            descriptor,
            origin,
        });
    }

    ColumnMapping::new(columns)
}

/// Returns `key`, or the first `key_N` (N from 2) not yet emitted.
fn unique_key(emitted: &BTreeSet<String>, key: String) -> String {
    if !emitted.contains(&key) {
        return key;
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{key}_{suffix}");
        if !emitted.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Replaces the binding of the column at `index` with a user-chosen descriptor.
pub fn override_column(
    mapping: &ColumnMapping,
    index: usize,
    descriptor: ColumnDescriptor,
) -> Result<ColumnMapping> {
    mapping
        .with_descriptor(index, descriptor)
        .ok_or(MapError::ColumnOutOfRange {
            index,
            len: mapping.len(),
        })
}

/// Changes only the semantic type of the column at `index`.
pub fn override_type(
    mapping: &ColumnMapping,
    index: usize,
    semantic_type: SemanticType,
) -> Result<ColumnMapping> {
    let current = mapping
        .descriptor_at(index)
        .ok_or(MapError::ColumnOutOfRange {
            index,
            len: mapping.len(),
        })?;
    override_column(mapping, index, current.clone().with_type(semantic_type))
}

/// Changes the semantic type of the first column whose header is `header`.
pub fn override_type_by_header(
    mapping: &ColumnMapping,
    header: &str,
    semantic_type: SemanticType,
) -> Result<ColumnMapping> {
    let column = mapping
        .by_header(header)
        .ok_or_else(|| MapError::ColumnNotFound(header.to_string()))?;
    override_type(mapping, column.index, semantic_type)
}
