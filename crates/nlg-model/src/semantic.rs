//! Semantic column types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a column's values should be parsed and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Text,
    Number,
    Date,
    Percentage,
    Currency,
}

impl SemanticType {
    pub const ALL: [SemanticType; 5] = [
        SemanticType::Text,
        SemanticType::Number,
        SemanticType::Date,
        SemanticType::Percentage,
        SemanticType::Currency,
    ];

    /// Lowercase identifier, also used in warning messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Number => "number",
            SemanticType::Date => "date",
            SemanticType::Percentage => "percentage",
            SemanticType::Currency => "currency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SemanticType::Text => "Text",
            SemanticType::Number => "Number",
            SemanticType::Date => "Date",
            SemanticType::Percentage => "Percentage",
            SemanticType::Currency => "Currency",
        }
    }

    /// Text columns are never type-checked.
    pub fn is_checked(&self) -> bool {
        !matches!(self, SemanticType::Text)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SemanticType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSemanticType(s.to_string()))
    }
}
