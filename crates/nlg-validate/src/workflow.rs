//! Per-file workflow state.
//!
//! A file moves `Unmapped -> Mapped -> Validated`. Changing the mapping of a
//! validated file drops its report, so a report always belongs to the
//! mapping stored next to it.

use tracing::debug;

use nlg_map::{auto_map_columns, override_column};
use nlg_model::{ColumnDescriptor, ColumnMapping, RawTable, ValidationReport};

use crate::error::{Result, ValidateError};
use crate::validator::validate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileState {
    /// Loaded, no column mapping yet.
    #[default]
    Unmapped,
    /// Mapped but not validated under the current mapping.
    Mapped(ColumnMapping),
    /// Validated under exactly this mapping.
    Validated {
        mapping: ColumnMapping,
        report: ValidationReport,
    },
}

impl FileState {
    pub fn mapping(&self) -> Option<&ColumnMapping> {
        match self {
            FileState::Unmapped => None,
            FileState::Mapped(mapping) | FileState::Validated { mapping, .. } => Some(mapping),
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            FileState::Validated { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileState::Unmapped => "not mapped",
            FileState::Mapped(_) => "mapped",
            FileState::Validated { .. } => "validated",
        }
    }

    /// Runs automatic mapping, discarding any previous mapping and report.
    #[must_use]
    pub fn auto_map(table: &RawTable) -> Self {
        FileState::Mapped(auto_map_columns(table))
    }

    /// Replaces one binding. Any existing report is dropped.
    pub fn with_override(&self, index: usize, descriptor: ColumnDescriptor) -> Result<Self> {
        let mapping = self.mapping().ok_or(ValidateError::NotReady)?;
        let updated = override_column(mapping, index, descriptor)?;
        if self.report().is_some() {
            debug!(column = index, "mapping changed, dropping report");
        }
        Ok(FileState::Mapped(updated))
    }

    /// Validates `table` under the current mapping.
    pub fn validate_file(&self, table: &RawTable) -> Result<Self> {
        let mapping = self.mapping().ok_or(ValidateError::NotReady)?;
        let report = validate(table, mapping);
        Ok(FileState::Validated {
            mapping: mapping.clone(),
            report,
        })
    }
}
