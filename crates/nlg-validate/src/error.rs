//! Error types for the validation workflow.

use thiserror::Error;

use nlg_map::MapError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Validation was requested before the file had a column mapping.
    #[error("file has no column mapping yet; map its columns before validating")]
    NotReady,

    #[error(transparent)]
    Mapping(#[from] MapError),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
