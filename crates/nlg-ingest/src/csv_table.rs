use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::debug;

use nlg_model::RawTable;

use crate::error::{IngestError, Result};

/// Upload size limit applied when none is configured (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted file extensions and their default delimiters.
pub const SUPPORTED_FORMATS: &[(&str, u8)] = &[("csv", b','), ("tsv", b'\t'), ("txt", b',')];

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter; when `None` it follows the file extension.
    pub delimiter: Option<u8>,
    pub max_file_size_bytes: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = bytes;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn supported_list() -> String {
    SUPPORTED_FORMATS
        .iter()
        .map(|(ext, _)| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks extension and size before anything is parsed.
///
/// Returns the delimiter implied by the extension.
pub fn check_upload(path: &Path, options: &IngestOptions) -> Result<u8> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let Some((_, delimiter)) = SUPPORTED_FORMATS.iter().find(|(ext, _)| *ext == extension) else {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            supported: supported_list(),
        });
    };

    let metadata = std::fs::metadata(path).map_err(|source| io_error(path, source))?;
    if metadata.len() > options.max_file_size_bytes {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: options.max_file_size_bytes,
        });
    }
    Ok(options.delimiter.unwrap_or(*delimiter))
}

fn io_error(path: &Path, source: io::Error) -> IngestError {
    if source.kind() == io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    read_csv_table_with_options(path, &IngestOptions::default())
}

pub fn read_csv_table_with_options(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let delimiter = check_upload(path, options)?;
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let table = parse_delimited(file, delimiter).map_err(|source| IngestError::CsvParse {
        path: PathBuf::from(path),
        source,
    })?;
    if table.headers.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}

/// Parses delimited text already held in memory.
pub fn parse_csv_str(content: &str) -> csv::Result<RawTable> {
    parse_delimited(content.as_bytes(), b',')
}

/// Parses delimited records: the first non-blank record is the header row,
/// empty lines are skipped, and record lengths may vary.
///
/// A data line of empty fields (`,,`) is kept as a row of missing cells.
pub fn parse_delimited<R: Read>(reader: R, delimiter: u8) -> csv::Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let blank_line = record.len() == 1 && record[0].trim().is_empty();
        match headers {
            None if record.iter().all(|value| value.trim().is_empty()) => {}
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(_) if blank_line => {}
            Some(_) => rows.push(record.iter().map(normalize_cell).collect()),
        }
    }
    Ok(RawTable::new(headers.unwrap_or_default(), rows))
}

/// Writes `table` as comma-separated text with every field quoted.
pub fn write_csv_table(path: &Path, table: &RawTable) -> Result<()> {
    let write_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(&table.headers).map_err(write_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|source| write_error(source.into()))?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote table");
    Ok(())
}
