//! Load, map, override and validate one data file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{info, trace};

use nlg_ingest::{IngestOptions, read_csv_table_with_options};
use nlg_model::{ColumnMapping, RawTable, SemanticType, ValidationReport};
use nlg_validate::{FileState, Issue, assess};

use crate::logging::redact_value;

/// `HEADER=TYPE` from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub header: String,
    pub semantic_type: SemanticType,
}

impl FromStr for TypeOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last `=` so headers may contain one.
        let (header, ty) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected HEADER=TYPE, got '{s}'"))?;
        let semantic_type = ty.parse::<SemanticType>().map_err(|e| e.to_string())?;
        Ok(Self {
            header: header.trim().to_string(),
            semantic_type,
        })
    }
}

/// Everything `inspect` prints.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub file: PathBuf,
    pub columns: usize,
    pub rows: usize,
    pub mapping: ColumnMapping,
    pub report: ValidationReport,
    #[serde(skip)]
    pub table: RawTable,
}

pub fn inspect_file(
    path: &Path,
    options: &IngestOptions,
    overrides: &[TypeOverride],
) -> Result<Inspection> {
    let table = read_csv_table_with_options(path, options)
        .with_context(|| format!("load {}", path.display()))?;
    inspect_table(path, table, overrides)
}

pub fn inspect_table(
    path: &Path,
    table: RawTable,
    overrides: &[TypeOverride],
) -> Result<Inspection> {
    let mut state = FileState::auto_map(&table);
    if let Some(mapping) = state.mapping() {
        info!(
            file = %path.display(),
            columns = mapping.len(),
            matched = mapping.matched_count(),
            "mapped columns"
        );
    }

    for entry in overrides {
        let mapping = state
            .mapping()
            .ok_or_else(|| anyhow!("file has no mapping"))?;
        let Some(column) = mapping.by_header(&entry.header) else {
            bail!("no column named '{}' in {}", entry.header, path.display());
        };
        let descriptor = column.descriptor.clone().with_type(entry.semantic_type);
        state = state.with_override(column.index, descriptor)?;
    }

    let state = state.validate_file(&table)?;
    let (Some(mapping), Some(report)) = (state.mapping(), state.report()) else {
        bail!("validation did not produce a report");
    };
    info!(
        file = %path.display(),
        rows = report.metrics.total_rows,
        valid_rows = report.metrics.valid_rows,
        warnings = report.warning_total(),
        "validated file"
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        for issue in assess(&table, mapping).issues {
            if let Issue::InvalidValue {
                row, header, value, ..
            } = &issue
            {
                trace!(row, header = %header, value = redact_value(value), "invalid cell");
            }
        }
    }

    Ok(Inspection {
        file: path.to_path_buf(),
        columns: table.column_count(),
        rows: table.row_count(),
        mapping: mapping.clone(),
        report: report.clone(),
        table,
    })
}
