//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an uploaded data file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Upload acceptance ===
    /// File extension is not one of the accepted formats.
    #[error("unsupported file format for {path}; supported formats: {supported}")]
    UnsupportedFormat { path: PathBuf, supported: String },

    /// File is larger than the configured limit.
    #[error("file {path} is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    // === File system ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata or contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing ===
    /// The delimited reader rejected the input.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File contains no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Output ===
    /// Failed to write a table back to disk.
    #[error("failed to write {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/sales.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/sales.csv");

        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            size: 20,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "file big.csv is 20 bytes, exceeding the 10 byte limit"
        );
    }
}
