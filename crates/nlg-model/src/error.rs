use thiserror::Error;

/// Errors raised when boundary text or editor commands cannot be turned into model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown subscription tier '{0}' (expected free, basic or pro)")]
    UnknownTier(String),
    #[error("unknown semantic type '{0}' (expected text, number, date, percentage or currency)")]
    UnknownSemanticType(String),
    #[error("unknown chart type '{0}'")]
    UnknownChartType(String),
    #[error("unknown export format '{0}'")]
    UnknownExportFormat(String),
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),
    #[error("section index {index} out of range for {len} sections")]
    SectionOutOfRange { index: usize, len: usize },
    #[error("section not found: {0}")]
    SectionNotFound(String),
    #[error("section is read-only: {0}")]
    SectionReadOnly(String),
    #[error("section id already in use: {0}")]
    DuplicateSectionId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
