//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// No column at this position in the mapping.
    #[error("column index {index} out of range for {len} mapped columns")]
    ColumnOutOfRange { index: usize, len: usize },
    /// Header text not present in the mapping.
    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
