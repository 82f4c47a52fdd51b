//! Data quality validation for mapped tables.

pub mod checks;
pub mod error;
pub mod issue;
pub mod validator;
pub mod workflow;

pub use error::{Result, ValidateError};
pub use issue::Issue;
pub use validator::{
    Assessment, MAX_REPORTED_WARNINGS, assess, clean_table, suggestions, validate,
};
pub use workflow::FileState;
