//! Column type inference and canonical schema mapping.

pub mod detect;
pub mod dictionary;
pub mod engine;
pub mod error;

pub use detect::{
    DETECTION_RULES, DetectionRule, SAMPLE_SIZE, detect_column_type, sample_column,
};
pub use dictionary::{CANONICAL_FIELDS, CanonicalField, match_canonical};
pub use engine::{
    auto_map_columns, derive_key, override_column, override_type, override_type_by_header,
};
pub use error::{MapError, Result};
